//! Port definitions for the interactive pipeline.
//!
//! Contains trait definitions that define interfaces between the pipeline
//! and the presentation layer.

pub mod frame_ready_sink;
