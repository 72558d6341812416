pub mod camera;
pub mod cancellation;
pub mod colour;
pub mod data;
pub mod frame;
pub mod kernels;
pub mod stats;
