//! Instrumentation smoke test, only built with the `tracing` feature.
#![cfg(feature = "tracing")]

use jitter_backoff::Backoff;
use std::time::Duration;

#[test]
fn test_instrumented_calls_under_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("jitter_backoff=trace")
        .with_test_writer()
        .try_init();

    // max < initial triggers the configuration warning.
    let backoff = Backoff::builder()
        .initial(Duration::from_secs(1))
        .max(Duration::from_millis(500))
        .jitter(false)
        .build();

    assert_eq!(backoff.next_delay(), Duration::from_secs(1));
    assert_eq!(backoff.next_delay(), Duration::from_millis(500));
    backoff.reset();
    assert_eq!(backoff.next_delay(), Duration::from_secs(1));
}
