//! Display read model of registry records.
//!
//! [`ReadModelMapper`] turns raw contract records from [`crate::types`] into
//! [`Appchain`], [`Validator`] and [`ValidatorSet`] with amounts converted by
//! [`crate::num::Converter`]. [`Reader`] fetches and maps in one go.

mod appchain;
mod cursor;
mod mapper;
mod reader;
mod validator;

pub use appchain::Appchain;
pub use cursor::ValidatorSetCursor;
pub use mapper::{ReadModelMapper, map_batch};
pub use reader::{Reader, StakingOverview};
pub use validator::{Validator, ValidatorSet};
