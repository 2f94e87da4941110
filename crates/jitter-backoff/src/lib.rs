#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Exponential backoff delay calculation with optional full-range jitter.
//!
//! This crate computes how long to wait between retries of a failing
//! operation. It does not sleep, spawn, or retry anything itself:
//!
//! - **Growth**: each delay is the previous one times a fixed factor
//! - **Clamping**: delays after the first never exceed a configured maximum
//! - **Jitter**: optionally randomize each delay uniformly over `[0, delay]`
//!   to keep many callers from retrying in lockstep
//! - **Reset**: start the sequence over after a success
//! - **Sharing**: one instance can be used from many threads at once
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use jitter_backoff::prelude::*;
//! use std::time::Duration;
//!
//! let backoff = Backoff::builder()
//!     .initial(Duration::from_millis(100))
//!     .max(Duration::from_secs(1))
//!     .jitter(false)
//!     .build();
//!
//! let delays: Vec<_> = backoff.delays().take(5).collect();
//! assert_eq!(delays, [100, 200, 400, 800, 1000].map(Duration::from_millis));
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: emit `tracing` events for each computed delay, each reset, and
//!   for configurations that fail [`BackoffConfig::validate`].

pub mod backoff;
pub mod config;
pub mod error;

pub use backoff::{Backoff, BackoffBuilder, Delays};
pub use config::BackoffConfig;
pub use error::{ConfigError, Result};

/// Convenient re-exports of commonly used items.
///
/// Import all core items with:
///
/// ```rust
/// use jitter_backoff::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backoff::{Backoff, BackoffBuilder};
    pub use crate::config::BackoffConfig;
    pub use crate::error::ConfigError;
}
