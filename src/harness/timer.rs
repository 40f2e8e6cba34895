//! Clock sampling around a single kernel call.
//!
//! Uses [`Instant`], which is monotonic. On Linux it reads
//! `CLOCK_MONOTONIC` with nanosecond resolution, so one tick is 1e-9 s and
//! [`Duration::as_secs_f64`] is the ticks-to-seconds conversion.

use std::time::{Duration, Instant};

pub struct Stopwatch;

impl Stopwatch {
    /// Sample the clock, run `f`, sample again.
    pub fn time<F: FnOnce()>(f: F) -> Duration {
        let start = Instant::now();
        f();
        start.elapsed()
    }

    /// Two consecutive samples with nothing in between. Used for a disabled
    /// step so its reported time is the clock's own overhead.
    pub fn skip() -> Duration {
        let start = Instant::now();
        let end = Instant::now();
        end.duration_since(start)
    }
}
