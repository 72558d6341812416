use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraModelError {
    ZeroMinZoom,
    MaxZoomNotAboveMin { min_zoom: u64, max_zoom: u64 },
}

impl fmt::Display for CameraModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinZoom => write!(f, "minimum zoom must be greater than zero"),
            Self::MaxZoomNotAboveMin { min_zoom, max_zoom } => {
                write!(
                    f,
                    "maximum zoom {} must be greater than minimum zoom {}",
                    max_zoom, min_zoom
                )
            }
        }
    }
}

impl Error for CameraModelError {}
