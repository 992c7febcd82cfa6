use crate::error::{ErrorSeverity, RulesError};

use super::catalog::AbilityId;
use super::tier::Tier;

/// Reasons an ability cannot be learned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    #[error("ability {0} is not in the catalog")]
    UnknownAbility(AbilityId),

    #[error("ability {0} is already learned")]
    AlreadyLearned(AbilityId),

    #[error("{tier} is locked: {needed} lower-tier abilities required, {have} owned")]
    TierLocked { tier: Tier, needed: u32, have: u32 },

    #[error("not enough ability points: need {cost}, have {available}")]
    InsufficientPoints { cost: u32, available: u32 },
}

impl RulesError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAbility(_) => ErrorSeverity::Validation,
            Self::AlreadyLearned(_) | Self::TierLocked { .. } | Self::InsufficientPoints { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAbility(_) => "unknown_ability",
            Self::AlreadyLearned(_) => "already_learned",
            Self::TierLocked { .. } => "tier_locked",
            Self::InsufficientPoints { .. } => "insufficient_points",
        }
    }
}
