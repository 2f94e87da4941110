//! Sharing one `Backoff` between threads.

use jitter_backoff::Backoff;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const THREADS: usize = 100;
const CALLS_PER_THREAD: usize = 10;

fn spawn_callers(backoff: &Arc<Backoff>) -> Vec<Duration> {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let backoff = Arc::clone(backoff);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..CALLS_PER_THREAD)
                    .map(|_| backoff.next_delay())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect()
}

#[test]
fn test_concurrent_calls_match_a_serial_sequence() {
    let build = || {
        Backoff::builder()
            .initial(Duration::from_millis(10))
            .factor(1.5)
            .max(Duration::from_millis(100))
            .jitter(false)
            .build()
    };

    let shared = Arc::new(build());
    let mut observed = spawn_callers(&shared);

    let serial = build();
    let mut expected: Vec<_> = serial.delays().take(THREADS * CALLS_PER_THREAD).collect();

    // Every step happened exactly once: same multiset as a serial run.
    observed.sort();
    expected.sort();
    assert_eq!(observed, expected);

    let firsts = observed
        .iter()
        .filter(|d| **d == Duration::from_millis(10))
        .count();
    assert_eq!(firsts, 1, "only one caller may observe the first delay");
}

#[test]
fn test_concurrent_calls_stay_in_bounds() {
    let backoff = Arc::new(Backoff::new(
        Duration::from_millis(10),
        1.5,
        Duration::from_millis(100),
    ));

    for delay in spawn_callers(&backoff) {
        assert!(
            delay <= Duration::from_millis(100),
            "got duration {:?} exceeding max",
            delay
        );
    }
    assert_eq!(backoff.current(), Some(Duration::from_millis(100)));
}

#[test]
fn test_concurrent_resets_only_yield_sequence_values() {
    let backoff = Arc::new(
        Backoff::builder()
            .initial(Duration::from_millis(1))
            .factor(2.0)
            .max(Duration::from_millis(64))
            .jitter(false)
            .build(),
    );
    let valid: Vec<_> = [1, 2, 4, 8, 16, 32, 64]
        .into_iter()
        .map(Duration::from_millis)
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let backoff = Arc::clone(&backoff);
            thread::spawn(move || {
                let mut seen = Vec::new();
                for j in 0..500 {
                    if (i + j) % 7 == 0 {
                        backoff.reset();
                    } else {
                        seen.push(backoff.next_delay());
                    }
                }
                seen
            })
        })
        .collect();

    for handle in handles {
        for delay in handle.join().unwrap() {
            assert!(valid.contains(&delay), "unexpected delay {:?}", delay);
        }
    }
}
