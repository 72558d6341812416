use std::error::Error;
use std::fmt;

use crate::core::data::camera_state::CameraState;
use crate::core::data::render_settings::RenderSettings;
use crate::core::kernels::escape_time::PixelGeometry;
use crate::core::kernels::ports::fractal_kernel::FractalKernel;
use crate::native::{MANDELBROT_ABI_VERSION, mandelbrot_abi_version, mandelbrot_render_u32};

/// `(center_x, center_y, zoom, width, height, max_iterations, dst, dst_len)`
pub type NativeRenderFn = unsafe extern "C" fn(f64, f64, u64, i32, i32, i32, *mut u32, usize);

pub type NativeAbiVersionFn = extern "C" fn() -> u32;

/// Entry points resolved from an accelerated library. A missing symbol is
/// `None`.
#[derive(Debug, Copy, Clone)]
pub struct NativeSymbols {
    pub abi_version: Option<NativeAbiVersionFn>,
    pub render: Option<NativeRenderFn>,
}

impl NativeSymbols {
    /// The entry points exported by this crate's own `native` module.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            abi_version: Some(mandelbrot_abi_version as NativeAbiVersionFn),
            render: Some(mandelbrot_render_u32 as NativeRenderFn),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NativeKernelError {
    SymbolUnavailable(&'static str),
    AbiVersionMismatch { expected: u32, found: u32 },
}

impl fmt::Display for NativeKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SymbolUnavailable(symbol) => {
                write!(f, "native symbol `{}` is not available", symbol)
            }
            Self::AbiVersionMismatch { expected, found } => {
                write!(
                    f,
                    "native library ABI version {} does not match expected {}",
                    found, expected
                )
            }
        }
    }
}

impl Error for NativeKernelError {}

/// Kernel that hands the whole pixel loop to an accelerated routine across
/// the C ABI. Binding failures are reported once, when the kernel is built;
/// rendering itself never fails.
#[derive(Debug)]
pub struct NativeKernel {
    render_fn: NativeRenderFn,
}

impl NativeKernel {
    pub fn bind(symbols: NativeSymbols) -> Result<Self, NativeKernelError> {
        let abi_version = symbols
            .abi_version
            .ok_or(NativeKernelError::SymbolUnavailable("mandelbrot_abi_version"))?;
        let render_fn = symbols
            .render
            .ok_or(NativeKernelError::SymbolUnavailable("mandelbrot_render_u32"))?;

        let found = abi_version();
        if found != MANDELBROT_ABI_VERSION {
            return Err(NativeKernelError::AbiVersionMismatch {
                expected: MANDELBROT_ABI_VERSION,
                found,
            });
        }

        Ok(Self { render_fn })
    }

    pub fn bundled() -> Result<Self, NativeKernelError> {
        Self::bind(NativeSymbols::bundled())
    }
}

impl FractalKernel for NativeKernel {
    fn name(&self) -> &str {
        "Native accelerated"
    }

    fn render(
        &self,
        camera: &CameraState,
        settings: &RenderSettings,
        width: i32,
        height: i32,
        dst: &mut [u32],
    ) {
        let Some(geometry) = PixelGeometry::new(
            camera.center_world.x,
            camera.center_world.y,
            camera.zoom,
            width,
            height,
            dst.len(),
        ) else {
            return;
        };

        let max_iterations = i32::try_from(settings.max_iterations()).unwrap_or(i32::MAX);
        let dst_len = geometry.pixel_count();

        // SAFETY: `dst` is an exclusive borrow that outlives the call, so the
        // pointer is valid, stable and unaliased for `dst_len <= dst.len()`
        // words. The callee writes at most `dst_len` words and keeps nothing.
        unsafe {
            (self.render_fn)(
                geometry.center_x,
                geometry.center_y,
                camera.zoom,
                width,
                height,
                max_iterations,
                dst.as_mut_ptr(),
                dst_len,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::data::point::WorldPoint;
    use crate::core::kernels::software_kernel::SoftwareKernel;

    extern "C" fn wrong_abi_version() -> u32 {
        MANDELBROT_ABI_VERSION + 1
    }

    #[test]
    fn test_bundled_binds() {
        let kernel = NativeKernel::bundled().unwrap();

        assert_eq!(kernel.name(), "Native accelerated");
    }

    #[test]
    fn test_bind_fails_without_render_symbol() {
        let symbols = NativeSymbols {
            render: None,
            ..NativeSymbols::bundled()
        };

        assert_eq!(
            NativeKernel::bind(symbols).unwrap_err(),
            NativeKernelError::SymbolUnavailable("mandelbrot_render_u32")
        );
    }

    #[test]
    fn test_bind_fails_without_version_symbol() {
        let symbols = NativeSymbols {
            abi_version: None,
            ..NativeSymbols::bundled()
        };

        assert_eq!(
            NativeKernel::bind(symbols).unwrap_err(),
            NativeKernelError::SymbolUnavailable("mandelbrot_abi_version")
        );
    }

    #[test]
    fn test_bind_fails_on_abi_mismatch() {
        let symbols = NativeSymbols {
            abi_version: Some(wrong_abi_version as NativeAbiVersionFn),
            ..NativeSymbols::bundled()
        };

        assert_eq!(
            NativeKernel::bind(symbols).unwrap_err(),
            NativeKernelError::AbiVersionMismatch {
                expected: MANDELBROT_ABI_VERSION,
                found: MANDELBROT_ABI_VERSION + 1,
            }
        );
    }

    #[test]
    fn test_matches_software_kernel_pixel_for_pixel() {
        let native = NativeKernel::bundled().unwrap();
        let software: SoftwareKernel = SoftwareKernel::default();
        let camera = CameraState::new(WorldPoint::new(-0.75, 0.1), 90, PixelSize::new(53, 31));
        let settings = RenderSettings::new(300).unwrap();

        let mut from_native = vec![0; 53 * 31];
        let mut from_software = vec![0; 53 * 31];
        native.render(&camera, &settings, 53, 31, &mut from_native);
        software.render(&camera, &settings, 53, 31, &mut from_software);

        assert_eq!(from_native, from_software);
    }

    #[test]
    fn test_render_is_noop_on_undersized_destination() {
        let native = NativeKernel::bundled().unwrap();
        let camera = CameraState::new(WorldPoint::default(), 10, PixelSize::new(8, 8));
        let mut dst = vec![1_u32; 63];

        native.render(&camera, &RenderSettings::default(), 8, 8, &mut dst);

        assert!(dst.iter().all(|&c| c == 1));
    }
}
