use std::error::Error;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use log::info;
use mandelbrot_pipeline::{
    FrameReady, KernelKind, PipelineConfig, PixelDelta, PixelPoint, PixelSize, RenderPipeline,
    RenderStats,
};

const FRAME_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocks until a frame of `size` has been published.
fn wait_for_frame(frames: &Receiver<FrameReady>, size: PixelSize) -> Result<FrameReady, Box<dyn Error>> {
    loop {
        let frame = frames.recv_timeout(FRAME_TIMEOUT)?;

        if frame.width == size.width && frame.height == size.height {
            return Ok(frame);
        }
    }
}

/// Drives a short scripted session: render, pan, zoom, resize and switch
/// kernels, logging each frame as it arrives.
fn run(kernel: KernelKind) -> Result<RenderStats, Box<dyn Error>> {
    let (tx, frames) = mpsc::channel();
    let frame_sink = Arc::new(move |frame: FrameReady| {
        let _ = tx.send(frame);
    });

    let mut pipeline = RenderPipeline::new(PipelineConfig::default().with_kernel(kernel), frame_sink)?;
    pipeline.start()?;

    let small = PixelSize::new(320, 240);
    pipeline.set_viewport(small);
    let frame = wait_for_frame(&frames, small)?;
    info!("first frame {} in {:?}", frame.frame_id, frame.compute_duration);

    pipeline.pan_by_pixels(PixelDelta::new(40.0, -20.0));
    pipeline.zoom_at_pixel(PixelPoint::new(160.0, 120.0), 600);
    let frame = wait_for_frame(&frames, small)?;
    info!("zoomed frame {} in {:?}", frame.frame_id, frame.compute_duration);

    let large = PixelSize::new(640, 480);
    pipeline.set_viewport(large);
    let frame = wait_for_frame(&frames, large)?;
    info!("resized frame {} in {:?}", frame.frame_id, frame.compute_duration);
    info!("released {} retired target(s)", pipeline.drain_retired());

    for other in pipeline.available_kernels() {
        pipeline.set_kernel(other)?;
        let frame = wait_for_frame(&frames, large)?;
        info!("{} kernel frame {} in {:?}", other, frame.frame_id, frame.compute_duration);
    }

    pipeline.stop();

    let stats = pipeline.stats();
    info!("{}", stats);

    Ok(stats)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let kernel = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<KernelKind>()?,
        None => KernelKind::default(),
    };

    let stats = run(kernel)?;
    println!("{}", stats);

    Ok(())
}
