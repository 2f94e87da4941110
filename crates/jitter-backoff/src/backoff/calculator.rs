//! The stateful delay calculator.

use super::builder::BackoffBuilder;
use super::growth::{full_jitter, grow};
use crate::config::BackoffConfig;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::time::Duration;

/// Exponential backoff delay calculator with optional full-range jitter.
///
/// Each call to [`next_delay`](Self::next_delay) advances one step through
/// the sequence `initial, initial * factor, initial * factor^2, ...`, with
/// every step after the first clamped to `max`. With jitter enabled the
/// returned value is drawn uniformly from `[0, current]` instead.
///
/// One instance is one retry sequence. All methods take `&self`, so an
/// instance can be shared across threads behind an `Arc`; every step runs
/// under a single per-instance lock.
///
/// # First call
///
/// The first call after construction or [`reset`](Self::reset) always yields
/// `initial`, even when `initial > max`. Only later calls are clamped. Use
/// [`BackoffConfig::validate`] to reject such configurations up front.
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
///     .max(Duration::from_secs(1))
///     .jitter(false)
///     .build();
///
/// assert_eq!(backoff.next_delay(), Duration::from_millis(100));
/// assert_eq!(backoff.next_delay(), Duration::from_millis(200));
///
/// backoff.reset();
/// assert_eq!(backoff.next_delay(), Duration::from_millis(100));
/// ```
///
/// # Performance Characteristics
///
/// - **Memory**: O(1), no allocations after construction
/// - **CPU**: O(1) per call, one multiplication and at most one random draw
/// - **I/O**: none; callers decide how to wait
pub struct Backoff {
    initial: Duration,
    factor: f64,
    max: Duration,
    jitter: bool,
    seed: Option<u64>,
    state: Mutex<State>,
}

struct State {
    /// Last unjittered delay. `None` until the first step after construction
    /// or reset.
    current: Option<Duration>,
    rng: StdRng,
}

impl Backoff {
    /// Create a calculator with jitter enabled.
    ///
    /// No parameter is validated; see [`BackoffConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jitter_backoff::Backoff;
    /// use std::time::Duration;
    ///
    /// let backoff = Backoff::new(Duration::from_millis(500), 2.0, Duration::from_secs(10));
    /// assert!(backoff.next_delay() <= Duration::from_millis(500));
    /// ```
    pub fn new(initial: Duration, factor: f64, max: Duration) -> Self {
        Self::from_config(BackoffConfig::new(initial, factor, max))
    }

    /// Create a new builder starting from [`BackoffConfig::default`].
    pub fn builder() -> BackoffBuilder {
        BackoffBuilder::default()
    }

    /// Create a calculator from a complete configuration.
    ///
    /// Never fails. With the `tracing` feature, a configuration that does not
    /// pass [`BackoffConfig::validate`] is logged at `warn` level.
    pub fn from_config(config: BackoffConfig) -> Self {
        #[cfg(feature = "tracing")]
        {
            if let Err(err) = config.validate() {
                tracing::warn!(error = %err, "backoff configured with unusual parameters");
            }
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            initial: config.initial,
            factor: config.factor,
            max: config.max,
            jitter: config.jitter,
            seed: config.seed,
            state: Mutex::new(State { current: None, rng }),
        }
    }

    /// Advance one step and return the delay to wait before the next retry.
    ///
    /// The returned value is never negative. Without jitter it never exceeds
    /// `max` except on the first call, which returns `initial` unchanged.
    pub fn next_delay(&self) -> Duration {
        let mut state = self.state.lock();

        let (current, clamped) = match state.current {
            None => (self.initial, false),
            Some(previous) => grow(previous, self.factor, self.max),
        };
        state.current = Some(current);

        let delay = if self.jitter {
            full_jitter(&mut state.rng, current)
        } else {
            current
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?current, ?delay, clamped, "computed backoff delay");
        #[cfg(not(feature = "tracing"))]
        let _ = clamped;

        delay
    }

    /// Restart the sequence. The next call to [`next_delay`](Self::next_delay)
    /// behaves like the first call after construction.
    ///
    /// The jitter source is not reseeded.
    pub fn reset(&self) {
        self.state.lock().current = None;

        #[cfg(feature = "tracing")]
        tracing::debug!("backoff reset");
    }

    /// Iterate over successive delays.
    ///
    /// The iterator never ends; each item advances this calculator.
    ///
    /// ```rust
    /// use jitter_backoff::Backoff;
    /// use std::time::Duration;
    ///
    /// let backoff = Backoff::builder()
    ///     .initial(Duration::from_millis(100))
    ///     .max(Duration::from_millis(300))
    ///     .jitter(false)
    ///     .build();
    ///
    /// let delays: Vec<_> = backoff.delays().take(4).collect();
    /// assert_eq!(delays, [100, 200, 300, 300].map(Duration::from_millis));
    /// ```
    pub fn delays(&self) -> Delays<'_> {
        Delays { backoff: self }
    }

    /// Delay returned by the first step.
    pub fn initial(&self) -> Duration {
        self.initial
    }

    /// Per-step growth factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Upper bound on unjittered delays after the first step.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Whether returned delays are randomized.
    pub fn jitter_enabled(&self) -> bool {
        self.jitter
    }

    /// The most recent unjittered delay, or `None` if no step has been taken
    /// since construction or the last reset.
    pub fn current(&self) -> Option<Duration> {
        self.state.lock().current
    }

    /// Whether at least one step has been taken since construction or the
    /// last reset.
    pub fn is_started(&self) -> bool {
        self.state.lock().current.is_some()
    }

    /// The parameters this calculator was built with.
    pub fn config(&self) -> BackoffConfig {
        BackoffConfig {
            initial: self.initial,
            factor: self.factor,
            max: self.max,
            jitter: self.jitter,
            seed: self.seed,
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::from_config(BackoffConfig::default())
    }
}

impl From<BackoffConfig> for Backoff {
    fn from(config: BackoffConfig) -> Self {
        Self::from_config(config)
    }
}

impl fmt::Debug for Backoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backoff")
            .field("initial", &self.initial)
            .field("factor", &self.factor)
            .field("max", &self.max)
            .field("jitter", &self.jitter)
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

/// Infinite iterator over the delays of a [`Backoff`].
///
/// Created by [`Backoff::delays`].
#[derive(Debug)]
pub struct Delays<'a> {
    backoff: &'a Backoff,
}

impl Iterator for Delays<'_> {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        Some(self.backoff.next_delay())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
