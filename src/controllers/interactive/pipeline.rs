use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, trace};

use crate::controllers::interactive::config::PipelineConfig;
use crate::controllers::interactive::errors::PipelineError;
use crate::controllers::interactive::events::frame_ready::FrameReady;
use crate::controllers::interactive::ports::frame_ready_sink::FrameReadySink;
use crate::controllers::interactive::render_signal::RenderSignal;
use crate::core::camera::camera_model::CameraModel;
use crate::core::cancellation::{CancelFlag, CancelToken};
use crate::core::colour::classic_colour_map::ClassicColourMap;
use crate::core::data::camera_state::CameraState;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::{PixelDelta, PixelPoint};
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::render_stats::RenderStats;
use crate::core::frame::frame_target::{FrameSnapshot, FrameTarget};
use crate::core::frame::retired_targets::RetiredTargets;
use crate::core::kernels::kinds::KernelKind;
use crate::core::kernels::registry::{KernelRegistry, KernelRegistryError};
use crate::core::stats::frame_time_averager::FrameTimeAverager;
use crate::core::stats::throughput::ThroughputCounter;

/// How long the worker backs off when a consumer still pins the back slot.
const BACK_BUFFER_BUSY_BACKOFF: Duration = Duration::from_millis(1);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct FrameStats {
    averager: FrameTimeAverager,
    throughput: ThroughputCounter,
}

struct SharedState {
    camera: Mutex<CameraModel>,
    settings: Mutex<RenderSettings>,
    kernel_kind: Mutex<KernelKind>,
    registry: KernelRegistry,
    target: Mutex<Option<Arc<FrameTarget>>>,
    retired: RetiredTargets,
    signal: RenderSignal,
    cancel: CancelFlag,
    stats: Mutex<FrameStats>,
    frame_sink: Arc<dyn FrameReadySink>,
}

impl SharedState {
    fn current_target(&self) -> Option<Arc<FrameTarget>> {
        lock(&self.target).clone()
    }

    fn is_current(&self, target: &Arc<FrameTarget>) -> bool {
        lock(&self.target)
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, target))
    }

    fn camera_snapshot(&self) -> CameraState {
        lock(&self.camera).snapshot()
    }
}

/// Continuously re-renders the fractal on a single background worker and
/// publishes finished frames through a double-buffered [`FrameTarget`].
///
/// Input methods (`pan_by_pixels`, `zoom_at_pixel`, `set_viewport`, ...) can be
/// called from any thread; they update state and raise a coalescing render
/// request. The consumer reads the newest complete frame with
/// [`RenderPipeline::with_latest_frame`] and is told about new frames through
/// its [`FrameReadySink`].
pub struct RenderPipeline {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderPipeline {
    /// Builds a pipeline with the default kernels registered.
    pub fn new(
        config: PipelineConfig,
        frame_sink: Arc<dyn FrameReadySink>,
    ) -> Result<Self, PipelineError> {
        let colour_map = ClassicColourMap::new(config.colour_width)?;

        Self::with_registry(config, KernelRegistry::with_defaults(colour_map), frame_sink)
    }

    pub fn with_registry(
        config: PipelineConfig,
        registry: KernelRegistry,
        frame_sink: Arc<dyn FrameReadySink>,
    ) -> Result<Self, PipelineError> {
        let initial = CameraState::new(
            config.initial_center,
            config.initial_zoom,
            PixelSize::default(),
        );
        let camera = CameraModel::new(initial, config.min_zoom, config.max_zoom)?;
        let settings = RenderSettings::new(config.max_iterations)?;
        let averager = FrameTimeAverager::new(config.averager_window)?;
        registry.get(config.kernel)?;

        let shared = Arc::new(SharedState {
            camera: Mutex::new(camera),
            settings: Mutex::new(settings),
            kernel_kind: Mutex::new(config.kernel),
            registry,
            target: Mutex::new(None),
            retired: RetiredTargets::new(),
            signal: RenderSignal::new(),
            cancel: CancelFlag::new(),
            stats: Mutex::new(FrameStats {
                averager,
                throughput: ThroughputCounter::new(Instant::now()),
            }),
            frame_sink,
        });

        Ok(Self {
            shared,
            worker: None,
        })
    }

    /// Spawns the render worker. Does nothing if it is already running.
    pub fn start(&mut self) -> Result<(), PipelineError> {
        if self.worker.is_some() {
            return Ok(());
        }

        self.shared.cancel.reset();
        let worker_shared = Arc::clone(&self.shared);

        let worker = thread::Builder::new()
            .name("render-worker".to_string())
            .spawn(move || Self::worker_loop(&worker_shared))?;

        self.worker = Some(worker);
        info!("render pipeline started");

        Ok(())
    }

    /// Cancels the worker, wakes it if it is waiting and joins it. Does
    /// nothing if it is not running.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        self.shared.cancel.cancel();
        self.shared.signal.wake_all();

        if worker.join().is_err() {
            error!("render worker panicked");
        }

        info!("render pipeline stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn request_frame(&self) {
        self.shared.signal.request();
    }

    /// Switches to a new frame target of `size`. The old target is parked in
    /// the retirement queue until [`RenderPipeline::drain_retired`]. Invalid
    /// sizes and the current size are ignored.
    pub fn set_viewport(&self, size: PixelSize) {
        if !size.is_valid() {
            return;
        }

        lock(&self.shared.camera).set_viewport(size);

        let previous = {
            let mut current = lock(&self.shared.target);

            if current.as_ref().is_some_and(|target| target.size() == size) {
                return;
            }

            let next = match FrameTarget::new(size) {
                Ok(target) => Arc::new(target),
                Err(err) => {
                    debug!("ignoring viewport change: {}", err);
                    return;
                }
            };

            current.replace(next)
        };

        debug!("viewport resized to {}x{}", size.width, size.height);

        if let Some(previous) = previous {
            self.shared.retired.retire(previous);
        }

        self.request_frame();
    }

    pub fn pan_by_pixels(&self, delta: PixelDelta) {
        lock(&self.shared.camera).pan_by_pixels(delta);
        self.request_frame();
    }

    pub fn zoom_at_pixel(&self, anchor: PixelPoint, delta: i64) {
        lock(&self.shared.camera).zoom_at_pixel(anchor, delta);
        self.request_frame();
    }

    /// Ignores zero and values above `MAX_ITERATIONS_LIMIT`.
    pub fn set_max_iterations(&self, max_iterations: u32) {
        let Ok(settings) = RenderSettings::new(max_iterations) else {
            return;
        };

        *lock(&self.shared.settings) = settings;
        self.request_frame();
    }

    /// Selects the kernel used for subsequent frames. Fails immediately if
    /// nothing is registered for `kind`.
    pub fn set_kernel(&self, kind: KernelKind) -> Result<(), KernelRegistryError> {
        let kernel = self.shared.registry.get(kind)?;

        *lock(&self.shared.kernel_kind) = kind;
        info!("kernel set to {} ({})", kind, kernel.name());
        self.request_frame();

        Ok(())
    }

    #[must_use]
    pub fn kernel(&self) -> KernelKind {
        *lock(&self.shared.kernel_kind)
    }

    #[must_use]
    pub fn available_kernels(&self) -> Vec<KernelKind> {
        self.shared.registry.kinds()
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.shared.camera_snapshot()
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        *lock(&self.shared.settings)
    }

    #[must_use]
    pub fn current_target(&self) -> Option<Arc<FrameTarget>> {
        self.shared.current_target()
    }

    /// Runs `f` against the newest published frame of the current target.
    /// Returns `None` if there is no target or it has not published yet.
    pub fn with_latest_frame<R>(&self, f: impl FnOnce(&FrameSnapshot<'_>) -> R) -> Option<R> {
        let target = self.shared.current_target()?;
        let snapshot = target.front_snapshot();

        if snapshot.frame_id() == 0 {
            return None;
        }

        Some(f(&snapshot))
    }

    /// Releases retired targets. Call once the consumer no longer holds
    /// anything obtained from them.
    pub fn drain_retired(&self) -> usize {
        self.shared.retired.drain()
    }

    #[must_use]
    pub fn retired_count(&self) -> usize {
        self.shared.retired.len()
    }

    #[must_use]
    pub fn stats(&self) -> RenderStats {
        let size = self
            .shared
            .current_target()
            .map(|target| target.size())
            .unwrap_or_default();
        let stats = lock(&self.shared.stats);

        RenderStats {
            avg_compute_ms: stats.averager.average_ms(),
            compute_fps: stats.throughput.fps(),
            width: size.width,
            height: size.height,
            frames_computed_total: stats.throughput.frames_total(),
        }
    }

    fn worker_loop(shared: &SharedState) {
        debug!("render worker running");

        while let Some(coalesced) = shared.signal.wait(&shared.cancel) {
            trace!("render pass for {} coalesced request(s)", coalesced);

            let Some(target) = shared.current_target() else {
                continue;
            };

            let camera = shared.camera_snapshot();
            let settings = *lock(&shared.settings);
            let kind = *lock(&shared.kernel_kind);

            let kernel = match shared.registry.get(kind) {
                Ok(kernel) => kernel,
                Err(err) => {
                    error!("{}", err);
                    continue;
                }
            };

            let Some(mut back) = target.back_for_render() else {
                trace!("back buffer busy, retrying");
                thread::sleep(BACK_BUFFER_BUSY_BACKOFF);
                shared.signal.request();
                continue;
            };

            let start = Instant::now();
            kernel.render(
                &camera,
                &settings,
                target.width(),
                target.height(),
                back.pixels_mut(),
            );
            let compute_duration = start.elapsed();

            if shared.cancel.is_cancelled() {
                break;
            }

            if !shared.is_current(&target) {
                trace!("discarding frame rendered for a replaced target");
                continue;
            }

            let Some(frame_id) = back.publish() else {
                trace!("discarding frame, publish lost a race");
                continue;
            };

            {
                let mut stats = lock(&shared.stats);
                stats
                    .averager
                    .push(compute_duration.as_secs_f64() * 1000.0);

                if stats.throughput.record_frame(Instant::now()) {
                    debug!(
                        "compute {:.1} fps, avg {:.2} ms",
                        stats.throughput.fps(),
                        stats.averager.average_ms()
                    );
                }
            }

            trace!(
                "published frame {} ({}x{}) in {:?}",
                frame_id,
                target.width(),
                target.height(),
                compute_duration
            );

            shared.frame_sink.frame_ready(FrameReady {
                frame_id,
                width: target.width(),
                height: target.height(),
                compute_duration,
            });
        }

        debug!("render worker exiting");
    }
}

impl Drop for RenderPipeline {
    fn drop(&mut self) {
        self.stop();
    }
}
