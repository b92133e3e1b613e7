mod method;
mod raw;

pub use method::{RegistryChange, RegistryView, TokenChange, TokenView};
pub use raw::{RawAppchain, RawValidator, RawValidatorSet};

/// ID of appchain in the registry.
pub type AppchainId = u32;

/// NEAR account ID, e.g. `alice.testnet`.
pub type AccountId = String;

/// Height of the relay chain block.
pub type BlockHeight = u64;

/// Sequence number of appchain validator set.
/// Zero means no validator set was formed yet.
pub type SeqNum = u32;
