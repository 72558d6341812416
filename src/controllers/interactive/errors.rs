use std::error::Error;
use std::fmt;
use std::io;

use crate::core::camera::errors::CameraModelError;
use crate::core::colour::classic_colour_map::ClassicColourMapError;
use crate::core::data::render_settings::RenderSettingsError;
use crate::core::kernels::registry::KernelRegistryError;
use crate::core::stats::frame_time_averager::FrameTimeAveragerError;

/// Structural failures while building or starting a pipeline.
#[derive(Debug)]
pub enum PipelineError {
    Camera(CameraModelError),
    Settings(RenderSettingsError),
    ColourMap(ClassicColourMapError),
    Averager(FrameTimeAveragerError),
    Kernel(KernelRegistryError),
    Spawn(io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera(err) => write!(f, "invalid camera: {}", err),
            Self::Settings(err) => write!(f, "invalid render settings: {}", err),
            Self::ColourMap(err) => write!(f, "invalid colour map: {}", err),
            Self::Averager(err) => write!(f, "invalid frame time averager: {}", err),
            Self::Kernel(err) => write!(f, "kernel lookup failed: {}", err),
            Self::Spawn(err) => write!(f, "failed to spawn render worker: {}", err),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Camera(err) => Some(err),
            Self::Settings(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::Averager(err) => Some(err),
            Self::Kernel(err) => Some(err),
            Self::Spawn(err) => Some(err),
        }
    }
}

impl From<CameraModelError> for PipelineError {
    fn from(err: CameraModelError) -> Self {
        Self::Camera(err)
    }
}

impl From<RenderSettingsError> for PipelineError {
    fn from(err: RenderSettingsError) -> Self {
        Self::Settings(err)
    }
}

impl From<ClassicColourMapError> for PipelineError {
    fn from(err: ClassicColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<FrameTimeAveragerError> for PipelineError {
    fn from(err: FrameTimeAveragerError) -> Self {
        Self::Averager(err)
    }
}

impl From<KernelRegistryError> for PipelineError {
    fn from(err: KernelRegistryError) -> Self {
        Self::Kernel(err)
    }
}

impl From<io::Error> for PipelineError {
    fn from(err: io::Error) -> Self {
        Self::Spawn(err)
    }
}
