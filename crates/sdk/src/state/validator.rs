use fastnum::UD256;
use serde::Serialize;

use crate::{num, types};

/// Validator of an appchain with its stake in display units.
#[derive(Clone, PartialEq, Serialize, derive_more::Debug)]
pub struct Validator {
    account_id: types::AccountId,
    #[debug("{staked_amount}")]
    #[serde(serialize_with = "num::serialize_decimal")]
    staked_amount: UD256,
    id: String,
    weight: u64,
    block_height: types::BlockHeight,
}

impl Validator {
    pub(crate) fn from_raw(raw: &types::RawValidator, staked_amount: UD256) -> Self {
        Self {
            account_id: raw.account_id.clone(),
            staked_amount,
            id: raw.id.clone(),
            weight: raw.weight,
            block_height: raw.block_height,
        }
    }

    /// NEAR account of the validator.
    pub fn account_id(&self) -> &str { &self.account_id }

    /// Amount staked by the validator.
    pub fn staked_amount(&self) -> UD256 { self.staked_amount }

    /// Validator ID on the appchain side (session key).
    pub fn id(&self) -> &str { &self.id }

    /// Shortened [`Self::id`] keeping its first and last 10 characters.
    pub fn short_id(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        if chars.len() <= 23 {
            return self.id.clone();
        }
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 10..].iter().collect();
        format!("{head}...{tail}")
    }

    pub fn weight(&self) -> u64 { self.weight }

    /// Relay block the validator staked at.
    pub fn block_height(&self) -> types::BlockHeight { self.block_height }
}

/// Validator set of an appchain at a particular sequence number.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidatorSet {
    seq_num: types::SeqNum,
    validators: Vec<Validator>,
}

impl ValidatorSet {
    pub(crate) fn new(seq_num: types::SeqNum, validators: Vec<Validator>) -> Self {
        Self { seq_num, validators }
    }

    /// Empty set used before the first validator set is formed.
    pub fn empty() -> Self { Self { seq_num: 0, validators: Vec::new() } }

    pub fn seq_num(&self) -> types::SeqNum { self.seq_num }

    pub fn validators(&self) -> &[Validator] { &self.validators }

    /// Total stake of the set.
    pub fn total_staked(&self) -> UD256 { self.validators.iter().map(|v| v.staked_amount).sum() }

    pub fn is_empty(&self) -> bool { self.validators.is_empty() }
}

#[cfg(feature = "display")]
impl tabled::Tabled for Validator {
    const LENGTH: usize = 5;

    fn fields(&self) -> Vec<std::borrow::Cow<'_, str>> {
        use colored::Colorize;

        vec![
            self.account_id.as_str().into(),
            self.short_id().into(),
            self.weight.to_string().into(),
            num::format_plain(&self.staked_amount).green().to_string().into(),
            format!("#{}", self.block_height).into(),
        ]
    }

    fn headers() -> Vec<std::borrow::Cow<'static, str>> {
        vec![
            "Account".into(),
            "Appchain Validator ID".into(),
            "Weight".into(),
            "Staked".into(),
            "Block Height".into(),
        ]
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for ValidatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use colored::Colorize;
        use tabled::{Table, settings::Style};

        writeln!(
            f,
            "{} | Validators: {} | Total staked: {}",
            format!("Validator set #{}", self.seq_num).blue(),
            self.validators.len(),
            num::format_plain(&self.total_staked()).green(),
        )?;
        if self.validators.is_empty() {
            return Ok(());
        }
        let mut table = Table::new(&self.validators);
        table.with(Style::sharp());
        table.fmt(f)
    }
}
