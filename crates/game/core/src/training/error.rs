use crate::error::{ErrorSeverity, RulesError};
use crate::stats::TrainingStat;

/// Errors raised by the training economy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainingError {
    #[error("must request at least one point")]
    InvalidCount,

    #[error("unknown stat key '{0}'")]
    UnknownStatKey(String),

    #[error("{0} cannot be raised any further")]
    StatAtMaximum(TrainingStat),

    /// Not even the first increment is affordable. Partial allocations are
    /// reported as successes with `applied < requested`.
    #[error("need {needed} points for +1 {stat} (soft cap), have {available}")]
    InsufficientBank {
        stat: TrainingStat,
        needed: u32,
        available: u32,
    },
}

impl RulesError for TrainingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCount | Self::UnknownStatKey(_) | Self::StatAtMaximum(_) => {
                ErrorSeverity::Validation
            }
            Self::InsufficientBank { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCount => "invalid_count",
            Self::UnknownStatKey(_) => "unknown_stat_key",
            Self::StatAtMaximum(_) => "stat_at_maximum",
            Self::InsufficientBank { .. } => "insufficient_bank",
        }
    }
}
