//! Error types for backoff configuration.
//!
//! The calculator itself is total: constructing a [`Backoff`](crate::Backoff)
//! and computing delays never fails. These errors only surface when a caller
//! opts into validation via [`BackoffConfig::validate`](crate::BackoffConfig::validate)
//! or [`BackoffBuilder::try_build`](crate::BackoffBuilder::try_build).

use std::time::Duration;

/// Result type for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A backoff configuration that is accepted by the calculator but is almost
/// certainly not what the caller meant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The growth factor is NaN or infinite.
    #[error("growth factor must be finite, got {0}")]
    NonFiniteFactor(f64),

    /// The growth factor is zero or negative, so every delay after the
    /// first collapses to zero.
    #[error("growth factor must be positive, got {0}")]
    NonPositiveFactor(f64),

    /// The first delay would exceed the configured maximum.
    #[error("initial delay {initial:?} exceeds maximum delay {max:?}")]
    MaxBelowInitial {
        /// The configured initial delay.
        initial: Duration,
        /// The configured maximum delay.
        max: Duration,
    },
}
