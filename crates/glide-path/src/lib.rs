//! Path-following animation for Glide
//!
//! Turns a scroll offset into camera-rig and airplane transforms along a
//! fixed Catmull-Rom flight path:
//! - `PathAnimator` — per-frame smoothing of camera position, look direction and bank
//! - `FlightPath` — TOML flight path definitions
//! - `FlightSystem` — `FrameSystem` tying the animator to a scroll source
//! - `run_sweep` — headless flythrough for tooling and tests

pub mod animator;
pub mod blend;
pub mod loader;
pub mod simulate;
pub mod state;

use glide_core::Result;
use glide_runtime::{FrameClock, FrameSystem, ScrollProgress};
use log::info;

pub use animator::{AnimatorConfig, FrameTargets, PathAnimator};
pub use loader::{load_flight_path, FlightPath};
pub use simulate::{run_sweep, Sweep};
pub use state::{AirplaneState, CameraState, FrameOutput};

/// Frame system that feeds the scroll offset into a [`PathAnimator`].
///
/// The host sets the raw scroll position on `scroll` whenever it changes and
/// ticks the system once per frame; the latest transforms are read back with
/// [`output`](Self::output). Frame count and elapsed time live on `clock`.
pub struct FlightSystem {
    pub animator: PathAnimator,
    pub scroll: ScrollProgress,
    pub clock: FrameClock,
}

impl FlightSystem {
    pub fn new(animator: PathAnimator, scroll: ScrollProgress) -> Self {
        Self {
            animator,
            scroll,
            clock: FrameClock::new(),
        }
    }

    /// Build from a flight path with an undamped single-page scroll source.
    pub fn from_flight_path(path: &FlightPath) -> Result<Self> {
        Ok(Self::new(path.build_animator()?, ScrollProgress::default()))
    }

    /// Advance one frame by the wall clock, for hosts without their own timer.
    ///
    /// The first tick after [`initialize`](FrameSystem::initialize) has a zero
    /// delta and leaves the transforms where they were snapped.
    pub fn tick(&mut self) -> Result<()> {
        let dt = self.clock.tick();
        self.animate(dt);
        Ok(())
    }

    /// The transforms of the most recent frame.
    pub fn output(&self) -> FrameOutput {
        FrameOutput {
            frame: self.clock.frame,
            time: self.clock.total_time,
            progress: self.scroll.offset(),
            camera: *self.animator.camera(),
            airplane: *self.animator.airplane(),
        }
    }

    fn animate(&mut self, dt: f64) {
        let dt = dt as f32;
        self.scroll.update(dt);
        self.animator.update(self.scroll.offset(), dt);
    }
}

impl FrameSystem for FlightSystem {
    fn initialize(&mut self) -> Result<()> {
        self.clock = FrameClock::with_max_delta(self.clock.max_delta);
        self.animator.snap(self.scroll.offset());
        info!(
            "Flight system initialized ({} control points, progress {:.3})",
            self.animator.curve().points().len(),
            self.scroll.offset()
        );
        Ok(())
    }

    fn update(&mut self, dt: f64) -> Result<()> {
        let dt = self.clock.advance(dt);
        self.animate(dt);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("Flight system shut down after {} frames", self.clock.frame);
        Ok(())
    }

    fn name(&self) -> &str {
        "flight"
    }
}
