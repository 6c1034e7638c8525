//! Error types shared by the state, API and configuration layers

use thiserror::Error;

/// Rejected timer settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A phase duration was zero minutes
    #[error("{field} must be at least 1 minute")]
    ZeroDuration {
        /// Name of the offending setting
        field: &'static str,
    },

    /// A phase duration exceeded the allowed maximum
    #[error("{field} must be at most {max} minutes")]
    DurationTooLong {
        /// Name of the offending setting
        field: &'static str,
        /// Largest accepted value
        max: u32,
    },

    /// The round count was zero
    #[error("total_rounds must be at least 1")]
    ZeroRounds,
}

/// Errors surfaced by `AppState` operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A mutex guarding shared state was poisoned by a panicking holder
    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),

    /// Settings update was rejected
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}
