//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (`TrainingError`, `TurnError`, `AbilityError`) are
//! defined next to the operations that raise them. This module only holds the
//! shared classification used by callers to decide how to surface a failure.
//!
//! Nothing in this crate is fatal: every error is a value the caller (a UI
//! preview or the authoritative server handler) can recover from.

/// Severity level of an error, used for categorization and messaging.
///
/// - **Recoverable**: the request was well-formed but the character's state
///   does not allow it right now (not enough points, tier still locked)
/// - **Validation**: malformed input that must be corrected before retrying
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later (after earning points, learning prerequisites).
    Recoverable,

    /// Invalid input; retrying unchanged will fail again.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable: it is sent over the wire to clients
pub trait RulesError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
    }
}
