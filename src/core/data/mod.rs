pub mod camera_state;
pub mod pixel_size;
pub mod point;
pub mod render_settings;
pub mod render_stats;
