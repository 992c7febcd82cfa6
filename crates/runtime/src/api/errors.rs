//! Unified error types surfaced by the runtime API.
//!
//! Wraps rules errors from tactics-core and repository failures so clients
//! can bubble them up with consistent context.
use thiserror::Error;

use tactics_core::{AbilityError, CombatantId, RulesError, TrainingError, TurnError};

pub use crate::repository::RepositoryError;
use crate::repository::CharacterId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    #[error(transparent)]
    Training(#[from] TrainingError),

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("combatant {0} is not part of this encounter")]
    UnknownCombatant(CombatantId),

    #[error("combatant {provided} acted but {expected} holds the turn")]
    NotCurrentActor {
        expected: CombatantId,
        provided: CombatantId,
    },

    #[error("combatant {0} is already defeated")]
    TargetDefeated(CombatantId),

    #[error("combatant {0} cannot target itself")]
    SelfTarget(CombatantId),

    #[error("'{0}' cannot join an encounter with no HP left")]
    JoinedDefeated(String),

    #[error("encounter is over")]
    EncounterOver,
}

impl RuntimeError {
    /// Stable identifier for clients. Rules errors keep their own codes.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterNotFound(_) => "character_not_found",
            Self::Training(err) => err.error_code(),
            Self::Ability(err) => err.error_code(),
            Self::Turn(err) => err.error_code(),
            Self::Repository(_) => "repository",
            Self::UnknownCombatant(_) => "unknown_combatant",
            Self::NotCurrentActor { .. } => "not_current_actor",
            Self::TargetDefeated(_) => "target_defeated",
            Self::SelfTarget(_) => "self_target",
            Self::JoinedDefeated(_) => "joined_defeated",
            Self::EncounterOver => "encounter_over",
        }
    }

    /// Whether the caller can fix the request and retry. Storage failures are not.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }
}
