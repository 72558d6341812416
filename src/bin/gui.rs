use std::error::Error;

use mandelbrot_pipeline::{KernelKind, PipelineConfig, run_gui};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let kernel = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<KernelKind>()?,
        None => KernelKind::default(),
    };

    run_gui(PipelineConfig::default().with_kernel(kernel))
}
