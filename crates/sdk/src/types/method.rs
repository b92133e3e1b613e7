use std::fmt::Display;

/// Read-only methods of the appchain registry contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistryView {
    GetAppchain,
    GetNumAppchains,
    GetCurrValidatorSetLen,
    GetCurrValidatorSetIndex,
    GetAppchainMinimumValidators,
    GetAppchains,
    GetTotalStakedBalance,
    GetValidatorSet,
    GetValidators,
    GetMinimumStakingAmount,
}

/// State-changing methods of the appchain registry contract.
///
/// Listed for completeness of the contract binding only, calling them
/// requires a signing wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistryChange {
    UpdateAppchain,
    Unstake,
    ActivateAppchain,
    FreezeAppchain,
    RemoveAppchain,
    PassAppchain,
    AppchainGoStaging,
}

/// Read-only methods of the fungible token contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenView {
    FtBalanceOf,
    StorageBalanceOf,
}

/// State-changing methods of the fungible token contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenChange {
    FtTransferCall,
    FtTransfer,
    StorageDeposit,
}

impl RegistryView {
    pub const ALL: [RegistryView; 10] = [
        RegistryView::GetAppchain,
        RegistryView::GetNumAppchains,
        RegistryView::GetCurrValidatorSetLen,
        RegistryView::GetCurrValidatorSetIndex,
        RegistryView::GetAppchainMinimumValidators,
        RegistryView::GetAppchains,
        RegistryView::GetTotalStakedBalance,
        RegistryView::GetValidatorSet,
        RegistryView::GetValidators,
        RegistryView::GetMinimumStakingAmount,
    ];

    /// Method name as exported by the contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryView::GetAppchain => "get_appchain",
            RegistryView::GetNumAppchains => "get_num_appchains",
            RegistryView::GetCurrValidatorSetLen => "get_curr_validator_set_len",
            RegistryView::GetCurrValidatorSetIndex => "get_curr_validator_set_index",
            // Misspelling is part of the deployed contract interface
            RegistryView::GetAppchainMinimumValidators => "get_appchain_minium_validators",
            RegistryView::GetAppchains => "get_appchains",
            RegistryView::GetTotalStakedBalance => "get_total_staked_balance",
            RegistryView::GetValidatorSet => "get_validator_set",
            RegistryView::GetValidators => "get_validators",
            RegistryView::GetMinimumStakingAmount => "get_minium_staking_amount",
        }
    }
}

impl RegistryChange {
    pub const ALL: [RegistryChange; 7] = [
        RegistryChange::UpdateAppchain,
        RegistryChange::Unstake,
        RegistryChange::ActivateAppchain,
        RegistryChange::FreezeAppchain,
        RegistryChange::RemoveAppchain,
        RegistryChange::PassAppchain,
        RegistryChange::AppchainGoStaging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryChange::UpdateAppchain => "update_appchain",
            RegistryChange::Unstake => "unstake",
            RegistryChange::ActivateAppchain => "activate_appchain",
            RegistryChange::FreezeAppchain => "freeze_appchain",
            RegistryChange::RemoveAppchain => "remove_appchain",
            RegistryChange::PassAppchain => "pass_appchain",
            RegistryChange::AppchainGoStaging => "appchain_go_staging",
        }
    }
}

impl TokenView {
    pub const ALL: [TokenView; 2] = [TokenView::FtBalanceOf, TokenView::StorageBalanceOf];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenView::FtBalanceOf => "ft_balance_of",
            TokenView::StorageBalanceOf => "storage_balance_of",
        }
    }
}

impl TokenChange {
    pub const ALL: [TokenChange; 3] =
        [TokenChange::FtTransferCall, TokenChange::FtTransfer, TokenChange::StorageDeposit];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenChange::FtTransferCall => "ft_transfer_call",
            TokenChange::FtTransfer => "ft_transfer",
            TokenChange::StorageDeposit => "storage_deposit",
        }
    }
}

impl Display for RegistryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl Display for RegistryChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl Display for TokenView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl Display for TokenChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}
