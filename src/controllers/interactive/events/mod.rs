pub mod frame_ready;
