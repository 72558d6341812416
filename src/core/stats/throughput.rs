use std::time::{Duration, Instant};

pub const THROUGHPUT_WINDOW: Duration = Duration::from_secs(1);

/// Computed frames per second, re-measured once per window, plus a running
/// total of published frames.
#[derive(Debug, Clone)]
pub struct ThroughputCounter {
    window_start: Instant,
    frames_in_window: u64,
    frames_total: u64,
    fps: f64,
}

impl ThroughputCounter {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames_in_window: 0,
            frames_total: 0,
            fps: 0.0,
        }
    }

    /// Records one published frame. Returns `true` when a window closed and
    /// [`ThroughputCounter::fps`] changed.
    pub fn record_frame(&mut self, now: Instant) -> bool {
        self.frames_in_window += 1;
        self.frames_total += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < THROUGHPUT_WINDOW {
            return false;
        }

        self.fps = self.frames_in_window as f64 / elapsed.as_secs_f64();
        self.frames_in_window = 0;
        self.window_start = now;

        true
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[must_use]
    pub fn frames_total(&self) -> u64 {
        self.frames_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_is_zero_until_first_window_closes() {
        let start = Instant::now();
        let mut counter = ThroughputCounter::new(start);

        assert!(!counter.record_frame(start + Duration::from_millis(100)));
        assert!(!counter.record_frame(start + Duration::from_millis(200)));

        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.frames_total(), 2);
    }

    #[test]
    fn test_fps_measured_over_window() {
        let start = Instant::now();
        let mut counter = ThroughputCounter::new(start);

        for i in 1..=9 {
            counter.record_frame(start + Duration::from_millis(i * 100));
        }
        assert!(counter.record_frame(start + Duration::from_secs(2)));

        assert_eq!(counter.fps(), 5.0);
        assert_eq!(counter.frames_total(), 10);
    }

    #[test]
    fn test_window_resets_after_measurement() {
        let start = Instant::now();
        let mut counter = ThroughputCounter::new(start);

        counter.record_frame(start + Duration::from_secs(1));
        assert_eq!(counter.fps(), 1.0);

        assert!(!counter.record_frame(start + Duration::from_millis(1500)));
        assert!(counter.record_frame(start + Duration::from_secs(3)));
        assert_eq!(counter.fps(), 1.0);
    }
}
