use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::core::colour::classic_colour_map::{ClassicColourMap, DEFAULT_COLOUR_WIDTH};
use crate::core::kernels::kinds::KernelKind;
use crate::core::kernels::native_kernel::NativeKernel;
use crate::core::kernels::ports::fractal_kernel::FractalKernel;
use crate::core::kernels::software_kernel::SoftwareKernel;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KernelRegistryError {
    Unregistered(KernelKind),
}

impl fmt::Display for KernelRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered(kind) => write!(f, "no kernel registered for `{}`", kind),
        }
    }
}

impl Error for KernelRegistryError {}

/// Maps a [`KernelKind`] to the kernel instance that implements it.
#[derive(Default)]
pub struct KernelRegistry {
    kernels: HashMap<KernelKind, Arc<dyn FractalKernel>>,
}

impl KernelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the software kernel, plus the native kernel when its entry
    /// points bind and it can reproduce `colour_map`. The native routine only
    /// colours with the default width, so any other width leaves it
    /// unregistered, as does a binding failure. Either is logged once.
    #[must_use]
    pub fn with_defaults(colour_map: ClassicColourMap) -> Self {
        let mut registry = Self::new();
        registry.register(KernelKind::Software, Arc::new(SoftwareKernel::new(colour_map)));

        if colour_map.width() != DEFAULT_COLOUR_WIDTH {
            warn!(
                "native kernel unavailable: it only supports colour width {}, configured {}",
                DEFAULT_COLOUR_WIDTH,
                colour_map.width()
            );
            return registry;
        }

        match NativeKernel::bundled() {
            Ok(kernel) => registry.register(KernelKind::Native, Arc::new(kernel)),
            Err(err) => warn!("native kernel unavailable: {}", err),
        }

        registry
    }

    pub fn register(&mut self, kind: KernelKind, kernel: Arc<dyn FractalKernel>) {
        debug!("registering kernel {} ({})", kind, kernel.name());
        self.kernels.insert(kind, kernel);
    }

    pub fn get(&self, kind: KernelKind) -> Result<Arc<dyn FractalKernel>, KernelRegistryError> {
        self.kernels
            .get(&kind)
            .cloned()
            .ok_or(KernelRegistryError::Unregistered(kind))
    }

    #[must_use]
    pub fn contains(&self, kind: KernelKind) -> bool {
        self.kernels.contains_key(&kind)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<KernelKind> {
        KernelKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }
}

impl fmt::Debug for KernelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
