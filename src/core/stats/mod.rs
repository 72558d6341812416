pub mod frame_time_averager;
pub mod throughput;
