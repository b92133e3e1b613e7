use fastnum::UD256;

use super::{Appchain, ReadModelMapper, ValidatorSet, ValidatorSetCursor};
use crate::{error::RelayError, rpc::ViewClient, types};

/// Registry-wide staking figures in display units.
#[derive(Clone, Copy, derive_more::Debug)]
pub struct StakingOverview {
    #[debug("{total_staked}")]
    pub total_staked: UD256,
    #[debug("{minimum_staking_amount}")]
    pub minimum_staking_amount: UD256,
}

/// Fetches registry records and returns them as read models.
#[derive(Clone, Debug)]
pub struct Reader {
    client: ViewClient,
    mapper: ReadModelMapper,
}

impl Reader {
    /// Reader converting amounts with the network token scale.
    pub fn new(client: ViewClient) -> Self {
        let mapper = ReadModelMapper::new(client.network().converter());
        Self { client, mapper }
    }

    /// Replaces the mapper, e.g. to limit display precision.
    pub fn with_mapper(mut self, mapper: ReadModelMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn client(&self) -> &ViewClient { &self.client }

    pub fn mapper(&self) -> &ReadModelMapper { &self.mapper }

    pub async fn appchain(&self, appchain_id: types::AppchainId) -> Result<Option<Appchain>, RelayError> {
        match self.client.appchain(appchain_id).await? {
            Some(raw) => Ok(Some(self.mapper.appchain(&raw)?)),
            None => Ok(None),
        }
    }

    /// Appchain together with a cursor positioned at its latest validator
    /// set. Both are requested concurrently.
    pub async fn appchain_with_cursor(
        &self,
        appchain_id: types::AppchainId,
    ) -> Result<Option<(Appchain, ValidatorSetCursor)>, RelayError> {
        let (raw, latest) = futures::try_join!(
            self.client.appchain(appchain_id),
            self.client.curr_validator_set_index(appchain_id),
        )?;
        match raw {
            Some(raw) => Ok(Some((self.mapper.appchain(&raw)?, ValidatorSetCursor::new(latest)))),
            None => Ok(None),
        }
    }

    /// Page of appchains starting at `from_index`.
    pub async fn appchains(&self, from_index: u32, limit: u32) -> Result<Vec<Appchain>, RelayError> {
        let raws = self.client.appchains(from_index, limit).await?;
        Ok(self.mapper.appchains(&raws)?)
    }

    /// All registered appchains, fetched in pages of `page_size`.
    pub async fn all_appchains(&self, page_size: u32) -> Result<Vec<Appchain>, RelayError> {
        if page_size == 0 {
            return Err(RelayError::InvalidArgument("page size must be positive".to_string()));
        }
        let total = self.client.num_appchains().await?;
        let pages = (0..total)
            .step_by(page_size as usize)
            .map(|from_index| self.client.appchains(from_index, page_size));
        let raws: Vec<_> = futures::future::try_join_all(pages)
            .await?
            .into_iter()
            .flatten()
            .collect();
        tracing::debug!(total, fetched = raws.len(), "fetched appchains");
        Ok(self.mapper.appchains(&raws)?)
    }

    /// Validator set at `seq_num`. Sequence number zero and sets unknown to
    /// the contract yield an empty set.
    pub async fn validator_set(
        &self,
        appchain_id: types::AppchainId,
        seq_num: types::SeqNum,
    ) -> Result<ValidatorSet, RelayError> {
        if seq_num == 0 {
            return Ok(ValidatorSet::empty());
        }
        match self.client.validator_set(appchain_id, seq_num).await? {
            Some(mut raw) => {
                raw.seq_num.get_or_insert(seq_num);
                Ok(self.mapper.validator_set(&raw)?)
            },
            None => Ok(ValidatorSet::new(seq_num, Vec::new())),
        }
    }

    /// Token balance of the account.
    pub async fn balance_of(&self, account_id: &str) -> Result<UD256, RelayError> {
        let raw = self.client.ft_balance_of(account_id).await?;
        Ok(self.mapper.converter().to_display(&raw)?)
    }

    pub async fn staking_overview(&self) -> Result<StakingOverview, RelayError> {
        let (total_staked, minimum_staking_amount) = futures::try_join!(
            self.client.total_staked_balance(),
            self.client.minimum_staking_amount(),
        )?;
        let converter = self.mapper.converter();
        Ok(StakingOverview {
            total_staked: converter.to_display(&total_staked)?,
            minimum_staking_amount: converter.to_display(&minimum_staking_amount)?,
        })
    }
}
