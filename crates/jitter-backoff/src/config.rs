//! Backoff configuration.
//!
//! [`BackoffConfig`] is the full, immutable parameter set of a
//! [`Backoff`](crate::Backoff). It can be written out by hand, folded together
//! with [`BackoffBuilder`](crate::BackoffBuilder), or loaded from any serde
//! format:
//!
//! ```rust
//! use jitter_backoff::BackoffConfig;
//! use std::time::Duration;
//!
//! let config: BackoffConfig = serde_json::from_str(r#"{ "initial_ms": 250, "jitter": false }"#)?;
//! assert_eq!(config.initial, Duration::from_millis(250));
//! assert_eq!(config.factor, 2.0);
//! assert!(!config.jitter);
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay returned by the first call.
pub const DEFAULT_INITIAL: Duration = Duration::from_millis(100);

/// Default growth factor (doubles each time).
pub const DEFAULT_FACTOR: f64 = 2.0;

/// Default upper bound on the unjittered delay.
pub const DEFAULT_MAX: Duration = Duration::from_secs(60);

/// Parameters of an exponential backoff sequence.
///
/// Missing fields take their defaults when deserializing, so a config file
/// only needs to name what it overrides. Durations are serialized as whole
/// milliseconds under `initial_ms` and `max_ms`.
///
/// No field is checked on construction. Use [`validate`](Self::validate) to
/// reject combinations that are legal but probably unintended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Delay returned by the first call after construction or reset.
    #[serde(rename = "initial_ms", with = "millis")]
    pub initial: Duration,

    /// Multiplier applied to the previous unjittered delay on each call.
    pub factor: f64,

    /// Upper bound on every unjittered delay after the first.
    #[serde(rename = "max_ms", with = "millis")]
    pub max: Duration,

    /// Randomize each delay uniformly over `[0, current]`.
    pub jitter: bool,

    /// Seed for the jitter source. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BackoffConfig {
    /// Defaults:
    /// - `initial`: 100ms
    /// - `factor`: 2.0
    /// - `max`: 60s
    /// - `jitter`: true
    /// - `seed`: None
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            factor: DEFAULT_FACTOR,
            max: DEFAULT_MAX,
            jitter: true,
            seed: None,
        }
    }
}

impl BackoffConfig {
    /// Create a configuration with jitter enabled and no fixed seed.
    pub fn new(initial: Duration, factor: f64, max: Duration) -> Self {
        Self {
            initial,
            factor,
            max,
            ..Self::default()
        }
    }

    /// Check for parameter combinations the calculator accepts but that are
    /// almost always a mistake.
    ///
    /// A factor in `(0, 1)` passes: a shrinking sequence is unusual but
    /// deliberate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jitter_backoff::{BackoffConfig, ConfigError};
    /// use std::time::Duration;
    ///
    /// let config = BackoffConfig::new(Duration::from_secs(1), 2.0, Duration::from_millis(500));
    /// assert!(matches!(config.validate(), Err(ConfigError::MaxBelowInitial { .. })));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(ConfigError::NonFiniteFactor(self.factor));
        }
        if self.factor <= 0.0 {
            return Err(ConfigError::NonPositiveFactor(self.factor));
        }
        if self.max < self.initial {
            return Err(ConfigError::MaxBelowInitial {
                initial: self.initial,
                max: self.max,
            });
        }
        Ok(())
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
