//! Headless flythrough: sweep the scroll offset and record every frame

use glide_core::{GlideError, Result};
use glide_runtime::{FrameClock, FrameSystem};

use crate::state::FrameOutput;
use crate::FlightSystem;

/// Upper bound on [`Sweep::frame_count`], so outputs fit in memory.
pub const MAX_FRAMES: u64 = 10_000_000;

/// A linear scroll from top to bottom at a fixed frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub fps: f64,
    /// Seconds taken to scroll from offset 0 to offset 1.
    pub duration: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            fps: 60.0,
            duration: 10.0,
        }
    }
}

impl Sweep {
    pub fn validate(&self) -> Result<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(GlideError::InvalidConfig(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(GlideError::InvalidConfig(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        let frames = (self.duration * self.fps).ceil();
        if frames > MAX_FRAMES as f64 {
            return Err(GlideError::InvalidConfig(format!(
                "sweep of {}s at {} fps needs {} frames, limit is {}",
                self.duration, self.fps, frames, MAX_FRAMES
            )));
        }
        Ok(())
    }

    /// Frames after the initial one; the last lands on offset 1.
    pub fn frame_count(&self) -> u64 {
        (self.duration * self.fps).ceil() as u64
    }
}

/// Run `system` through `sweep`, returning the initial frame plus one output per step.
pub fn run_sweep(system: &mut FlightSystem, sweep: Sweep) -> Result<Vec<FrameOutput>> {
    sweep.validate()?;

    let step = 1.0 / sweep.fps;
    let frames = sweep.frame_count();
    let mut outputs = Vec::with_capacity(frames as usize + 1);

    // The sweep controls every step itself; never cap it
    system.clock = FrameClock::with_max_delta(f64::INFINITY);
    system.scroll.set_offset(0.0);
    system.initialize()?;
    outputs.push(system.output());

    for _ in 0..frames {
        let offset = ((system.clock.total_time + step) / sweep.duration).min(1.0);
        system.scroll.set_offset(offset as f32);
        system.update(step)?;
        outputs.push(system.output());
    }

    system.shutdown()?;
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlightPath;

    #[test]
    fn sweep_reaches_the_end() {
        let mut system = FlightSystem::from_flight_path(&FlightPath::default_route()).unwrap();
        let outputs = run_sweep(
            &mut system,
            Sweep {
                fps: 30.0,
                duration: 2.0,
            },
        )
        .unwrap();

        assert_eq!(outputs.len(), 61);
        assert_eq!(outputs[0].frame, 0);
        assert_eq!(outputs[0].progress, 0.0);
        assert!((outputs[60].progress - 1.0).abs() < 1e-6);
        assert!((outputs[60].time - 2.0).abs() < 1e-9);
        for pair in outputs.windows(2) {
            assert!(pair[1].progress >= pair[0].progress);
            assert_eq!(pair[1].frame, pair[0].frame + 1);
        }
        for output in &outputs {
            assert!(output.airplane.bank_degrees.abs() <= 35.0 + 1e-4);
        }
    }

    #[test]
    fn invalid_sweep_is_rejected() {
        let mut system = FlightSystem::from_flight_path(&FlightPath::default_route()).unwrap();
        let sweep = Sweep {
            fps: 0.0,
            duration: 1.0,
        };
        assert!(matches!(
            run_sweep(&mut system, sweep).unwrap_err(),
            GlideError::InvalidConfig(_)
        ));
    }

    #[test]
    fn oversized_sweep_is_rejected() {
        let sweep = Sweep {
            fps: 60.0,
            duration: 1e30,
        };
        assert!(matches!(
            sweep.validate().unwrap_err(),
            GlideError::InvalidConfig(_)
        ));

        let mut system = FlightSystem::from_flight_path(&FlightPath::default_route()).unwrap();
        assert!(matches!(
            run_sweep(&mut system, sweep).unwrap_err(),
            GlideError::InvalidConfig(_)
        ));
        assert_eq!(system.output().frame, 0);
    }

    #[test]
    fn sweep_at_the_frame_limit_is_accepted() {
        let sweep = Sweep {
            fps: 1.0,
            duration: MAX_FRAMES as f64,
        };
        assert!(sweep.validate().is_ok());
        assert_eq!(sweep.frame_count(), MAX_FRAMES);
    }

    #[test]
    fn frame_count_rounds_up() {
        let sweep = Sweep {
            fps: 60.0,
            duration: 0.51,
        };
        assert_eq!(sweep.frame_count(), 31);
    }
}
