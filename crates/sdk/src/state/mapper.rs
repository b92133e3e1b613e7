use fastnum::UD256;

use super::{Appchain, Validator, ValidatorSet};
use crate::{error::MapError, num, types};

/// Maps raw registry records into their read models.
///
/// Every mapping is atomic: either all amount fields of the record convert
/// or an error is returned and nothing is produced. Input records are never
/// modified.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadModelMapper {
    converter: num::Converter,
}

impl ReadModelMapper {
    pub fn new(converter: num::Converter) -> Self { Self { converter } }

    /// Converter applied to amount fields.
    pub fn converter(&self) -> num::Converter { self.converter }

    /// Maps an appchain with its validators.
    pub fn appchain(&self, raw: &types::RawAppchain) -> Result<Appchain, MapError> {
        let bond_tokens = self.amount("bond_tokens", raw.bond_tokens.as_deref())?;
        let validators = self.validators(raw.validators.as_deref())?;
        Ok(Appchain::from_raw(raw, bond_tokens, validators))
    }

    /// Maps appchains in order, see [`map_batch`].
    pub fn appchains(&self, raws: &[types::RawAppchain]) -> Result<Vec<Appchain>, MapError> {
        let appchains = map_batch(raws, |raw| self.appchain(raw))?;
        tracing::debug!(count = appchains.len(), "mapped appchains");
        Ok(appchains)
    }

    pub fn validator(&self, raw: &types::RawValidator) -> Result<Validator, MapError> {
        let staked_amount = self.amount("staked_amount", raw.staked_amount.as_deref())?;
        Ok(Validator::from_raw(raw, staked_amount))
    }

    pub fn validator_set(&self, raw: &types::RawValidatorSet) -> Result<ValidatorSet, MapError> {
        let validators = self.validators(raw.validators.as_deref())?;
        Ok(ValidatorSet::new(raw.seq_num.unwrap_or_default(), validators))
    }

    fn validators(&self, raws: Option<&[types::RawValidator]>) -> Result<Vec<Validator>, MapError> {
        raws.ok_or_else(|| MapError::MissingField("validators".to_string()))?
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                self.validator(raw)
                    .map_err(|err| err.nested(&format!("validators[{i}]")))
            })
            .collect()
    }

    fn amount(&self, field: &str, raw: Option<&str>) -> Result<UD256, MapError> {
        let raw = raw.ok_or_else(|| MapError::MissingField(field.to_string()))?;
        self.converter
            .to_display(raw)
            .map_err(|source| MapError::InvalidAmount { field: field.to_string(), source })
    }
}

/// Maps every record of `records` in order.
///
/// Fails on the first record that fails, with
/// [`MapError::BatchElementFailure`] carrying its index. No partial output is
/// returned. Empty input maps to empty output.
pub fn map_batch<T, R, F>(records: &[T], map: F) -> Result<Vec<R>, MapError>
where
    F: Fn(&T) -> Result<R, MapError>,
{
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            map(record).map_err(|source| MapError::BatchElementFailure {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use fastnum::udec256;

    use super::*;
    use crate::error::AmountError;

    fn raw_validator(account_id: &str, staked_amount: Option<&str>) -> types::RawValidator {
        types::RawValidator {
            account_id: account_id.to_string(),
            staked_amount: staked_amount.map(str::to_string),
            id: "v1".to_string(),
            weight: 1,
            block_height: 10,
        }
    }

    #[test]
    fn maps_validator_stake() {
        let mapper = ReadModelMapper::default();
        let v = mapper
            .validator(&raw_validator("a.testnet", Some("100000000000000000000000")))
            .unwrap();
        assert_eq!(v.account_id(), "a.testnet");
        assert_eq!(v.staked_amount(), udec256!(0.1));
        assert_eq!(v.id(), "v1");
        assert_eq!(v.weight(), 1);
        assert_eq!(v.block_height(), 10);
    }

    #[test]
    fn validator_errors_name_the_field() {
        let mapper = ReadModelMapper::default();
        assert_eq!(
            mapper.validator(&raw_validator("a", None)),
            Err(MapError::MissingField("staked_amount".to_string()))
        );
        assert_eq!(
            mapper.validator(&raw_validator("a", Some("1.5"))),
            Err(MapError::InvalidAmount {
                field: "staked_amount".to_string(),
                source: AmountError::InvalidAmountFormat("1.5".to_string()),
            })
        );
    }

    #[test]
    fn validator_set_paths_include_index() {
        let mapper = ReadModelMapper::default();
        let raw = types::RawValidatorSet {
            seq_num: Some(4),
            validators: Some(vec![raw_validator("a", Some("1")), raw_validator("b", Some("x"))]),
        };
        assert_eq!(
            mapper.validator_set(&raw),
            Err(MapError::InvalidAmount {
                field: "validators[1].staked_amount".to_string(),
                source: AmountError::InvalidAmountFormat("x".to_string()),
            })
        );

        let raw = types::RawValidatorSet { seq_num: Some(4), validators: None };
        assert_eq!(
            mapper.validator_set(&raw),
            Err(MapError::MissingField("validators".to_string()))
        );
    }

    #[test]
    fn batch_of_nothing_is_nothing() {
        let out: Vec<u8> = map_batch(&[] as &[u8], |_| unreachable!()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn batch_stops_at_first_failure() {
        let records = [1u32, 2, 3, 4];
        let err = map_batch(&records, |r| {
            if r % 2 == 0 { Err(MapError::MissingField(format!("f{r}"))) } else { Ok(*r) }
        })
        .unwrap_err();
        assert_eq!(
            err,
            MapError::BatchElementFailure {
                index: 1,
                source: Box::new(MapError::MissingField("f2".to_string())),
            }
        );
    }
}
