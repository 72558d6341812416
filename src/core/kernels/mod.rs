pub mod escape_time;
pub mod kinds;
pub mod native_kernel;
pub mod ports;
pub mod registry;
pub mod software_kernel;
