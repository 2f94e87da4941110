//! Fluent construction of [`Backoff`].

use super::calculator::Backoff;
use crate::config::BackoffConfig;
use crate::error::Result;
use std::time::Duration;

/// Builder for configuring a [`Backoff`].
///
/// Every option starts at its [`BackoffConfig::default`] value and is
/// overridden by the setters in call order.
///
/// # Examples
///
/// ```rust
/// use jitter_backoff::Backoff;
/// use std::time::Duration;
///
/// let backoff = Backoff::builder()
///     .initial(Duration::from_millis(100))
///     .factor(2.0)
///     .max(Duration::from_secs(30))
///     .jitter(true)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BackoffBuilder {
    config: BackoffConfig,
}

impl BackoffBuilder {
    /// Start from an existing configuration instead of the defaults.
    pub fn from_config(config: BackoffConfig) -> Self {
        Self { config }
    }

    /// Set the delay returned by the first call.
    ///
    /// Default: 100ms
    pub fn initial(mut self, delay: Duration) -> Self {
        self.config.initial = delay;
        self
    }

    /// Set the per-step growth factor.
    ///
    /// Default: 2.0 (doubles each time)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jitter_backoff::Backoff;
    ///
    /// let backoff = Backoff::builder()
    ///     .factor(1.5)  // More gradual backoff
    ///     .build();
    /// ```
    pub fn factor(mut self, factor: f64) -> Self {
        self.config.factor = factor;
        self
    }

    /// Set the upper bound on unjittered delays.
    ///
    /// Default: 60s
    pub fn max(mut self, delay: Duration) -> Self {
        self.config.max = delay;
        self
    }

    /// Enable or disable full-range jitter.
    ///
    /// Default: true
    pub fn jitter(mut self, enabled: bool) -> Self {
        self.config.jitter = enabled;
        self
    }

    /// Seed the jitter source for a reproducible sequence.
    ///
    /// Default: seeded from OS entropy
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &BackoffConfig {
        &self.config
    }

    /// Build the `Backoff` without validating the parameters.
    pub fn build(self) -> Backoff {
        Backoff::from_config(self.config)
    }

    /// Validate the parameters, then build.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`](crate::ConfigError) reported by
    /// [`BackoffConfig::validate`].
    pub fn try_build(self) -> Result<Backoff> {
        self.config.validate()?;
        Ok(self.build())
    }
}
