//! Training economy: soft-cap point costs, the per-character ledger, and the
//! global reset window.
//!
//! All operations take the ledger and profile they act on explicitly; there
//! is no shared "current character". Callers serialize mutations per
//! character and re-derive stats afterwards.

pub mod cost;
pub mod error;
pub mod ledger;
pub mod period;

use core::str::FromStr;

use crate::stats::TrainingStat;

pub use cost::{SoftCapBand, next_point_cost, point_cost};
pub use error::TrainingError;
pub use ledger::{AbilityPointAward, Allocation, SessionAward, TrainingLedger, TrainingStatus};
pub use period::{ResetClock, ResetPeriod};

/// Parse a caller-supplied stat key (`"str"`, `"Ether_Control"`, ...).
pub fn parse_stat(key: &str) -> Result<TrainingStat, TrainingError> {
    TrainingStat::from_str(key.trim()).map_err(|_| TrainingError::UnknownStatKey(key.to_owned()))
}
