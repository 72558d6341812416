use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
/// Largest limit every kernel can honour; the native entry point takes an `i32`.
pub const MAX_ITERATIONS_LIMIT: u32 = i32::MAX as u32;

#[derive(Debug, PartialEq)]
pub enum RenderSettingsError {
    ZeroMaxIterationsError,
    MaxIterationsTooLargeError { max_iterations: u32, limit: u32 },
}

impl fmt::Display for RenderSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::MaxIterationsTooLargeError {
                max_iterations,
                limit,
            } => {
                write!(
                    f,
                    "Maximum iterations {} exceeds the limit of {}",
                    max_iterations, limit
                )
            }
        }
    }
}

impl Error for RenderSettingsError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    max_iterations: u32,
}

impl RenderSettings {
    pub fn new(max_iterations: u32) -> Result<Self, RenderSettingsError> {
        if max_iterations == 0 {
            return Err(RenderSettingsError::ZeroMaxIterationsError);
        }

        if max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(RenderSettingsError::MaxIterationsTooLargeError {
                max_iterations,
                limit: MAX_ITERATIONS_LIMIT,
            });
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_iterations() {
        assert_eq!(RenderSettings::default().max_iterations(), 256);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        assert_eq!(
            RenderSettings::new(0),
            Err(RenderSettingsError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_new_rejects_iterations_above_limit() {
        assert_eq!(
            RenderSettings::new(u32::MAX),
            Err(RenderSettingsError::MaxIterationsTooLargeError {
                max_iterations: u32::MAX,
                limit: MAX_ITERATIONS_LIMIT,
            })
        );
        assert_eq!(
            RenderSettings::new(MAX_ITERATIONS_LIMIT).unwrap().max_iterations(),
            i32::MAX as u32
        );
    }

    #[test]
    fn test_new_accepts_positive_iterations() {
        let settings = RenderSettings::new(1000).unwrap();

        assert_eq!(settings.max_iterations(), 1000);
    }
}
