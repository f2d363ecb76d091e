use std::time::{Duration, Instant};

use log::info;

/// Milliseconds, or microseconds for anything under a millisecond.
pub fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

/// Run `f` and log how long it took under `label`.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    info!("{label} finished in {}", format_duration(elapsed));
    (value, elapsed)
}

/// Accumulates the time of several [`timed`] runs.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    total: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lap<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        let (value, elapsed) = timed(label, f);
        self.total += elapsed;
        value
    }

    pub fn total(&self) -> Duration {
        self.total
    }
}
