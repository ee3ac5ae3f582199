//! Bounded condition polling.
//!
//! The suite never synchronises on bare sleeps; wherever it has to wait for
//! the remote game to reach a state, it probes for that state at a fixed
//! interval until a bound elapses. Expiry is a normal `None` outcome so
//! callers decide whether an unmet condition is fatal.

use std::time::{Duration, Instant};

/// Polls `probe` until it yields a value or `window` elapses.
///
/// The probe runs once immediately, then repeatedly with `interval` pauses
/// in between, with a final probe at the deadline. Returns `Ok(Some(value))`
/// on the first successful probe, `Ok(None)` once the window is exhausted,
/// and `Err` as soon as any probe fails.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lyra_smoke::poll::poll_until;
///
/// let mut calls = 0;
/// let found: Result<Option<u32>, &str> = poll_until(
///     Duration::from_millis(50),
///     Duration::from_millis(5),
///     || {
///         calls += 1;
///         Ok(if calls == 3 { Some(calls) } else { None })
///     },
/// );
/// assert_eq!(found, Ok(Some(3)));
/// ```
pub fn poll_until<T, E, F>(window: Duration, interval: Duration, mut probe: F) -> Result<Option<T>, E>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    let started = Instant::now();
    loop {
        if let Some(value) = probe()? {
            return Ok(Some(value));
        }
        let elapsed = started.elapsed();
        if elapsed >= window {
            return Ok(None);
        }
        let remaining = window - elapsed;
        std::thread::sleep(remaining.min(interval));
    }
}
