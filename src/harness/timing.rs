use std::time::{Duration, Instant};

/// Monotonic timer that writes its elapsed time into `sink` when dropped, so
/// the reading is captured however the timed scope is left.
pub struct Stopwatch<'a> {
    start: Instant,
    sink: &'a mut Duration,
}

impl<'a> Stopwatch<'a> {
    pub fn start(sink: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            sink,
        }
    }
}

impl Drop for Stopwatch<'_> {
    fn drop(&mut self) {
        *self.sink = self.start.elapsed();
    }
}
