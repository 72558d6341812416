use std::error::Error;
use std::fmt;

pub const DEFAULT_AVERAGER_WINDOW: usize = 60;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameTimeAveragerError {
    ZeroWindow,
}

impl fmt::Display for FrameTimeAveragerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindow => write!(f, "averager window must hold at least one sample"),
        }
    }
}

impl Error for FrameTimeAveragerError {}

/// Rolling mean over the last `window` frame compute times, in milliseconds.
#[derive(Debug, Clone)]
pub struct FrameTimeAverager {
    values: Vec<f64>,
    index: usize,
    count: usize,
}

impl FrameTimeAverager {
    pub fn new(window: usize) -> Result<Self, FrameTimeAveragerError> {
        if window == 0 {
            return Err(FrameTimeAveragerError::ZeroWindow);
        }

        Ok(Self {
            values: vec![0.0; window],
            index: 0,
            count: 0,
        })
    }

    pub fn push(&mut self, ms: f64) {
        self.values[self.index] = ms;
        self.index = (self.index + 1) % self.values.len();
        if self.count < self.values.len() {
            self.count += 1;
        }
    }

    #[must_use]
    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        self.values[..self.count].iter().sum::<f64>() / self.count as f64
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for FrameTimeAverager {
    fn default() -> Self {
        Self {
            values: vec![0.0; DEFAULT_AVERAGER_WINDOW],
            index: 0,
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_window() {
        assert_eq!(
            FrameTimeAverager::new(0).unwrap_err(),
            FrameTimeAveragerError::ZeroWindow
        );
    }

    #[test]
    fn test_empty_average_is_zero() {
        let averager = FrameTimeAverager::new(4).unwrap();

        assert_eq!(averager.average_ms(), 0.0);
        assert!(averager.is_empty());
    }

    #[test]
    fn test_partial_window_averages_pushed_values_only() {
        let mut averager = FrameTimeAverager::new(4).unwrap();

        averager.push(2.0);
        averager.push(4.0);

        assert_eq!(averager.average_ms(), 3.0);
        assert_eq!(averager.len(), 2);
    }

    #[test]
    fn test_full_window_drops_oldest_values() {
        let mut averager = FrameTimeAverager::new(3).unwrap();

        for ms in [100.0, 1.0, 2.0, 3.0] {
            averager.push(ms);
        }

        assert_eq!(averager.average_ms(), 2.0);
        assert_eq!(averager.len(), 3);
    }
}
