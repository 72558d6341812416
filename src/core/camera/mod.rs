pub mod camera_model;
pub mod errors;
