//! Exponential backoff with full-range jitter.
//!
//! # Key Types
//!
//! - [`Backoff`] - Thread-safe delay calculator
//! - [`BackoffBuilder`] - Fluent configuration
//! - [`Delays`] - Iterator over successive delays
//!
//! # Examples
//!
//! ```rust
//! use jitter_backoff::backoff::Backoff;
//! use std::time::Duration;
//!
//! let backoff = Backoff::new(Duration::from_millis(500), 2.0, Duration::from_secs(10));
//! for _ in 0..3 {
//!     let wait = backoff.next_delay();
//!     assert!(wait <= Duration::from_secs(10));
//!     // std::thread::sleep(wait) or tokio::time::sleep(wait).await
//! }
//! backoff.reset();
//! ```

mod builder;
mod calculator;
mod growth;

pub use builder::BackoffBuilder;
pub use calculator::{Backoff, Delays};
