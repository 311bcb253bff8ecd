//! Path-following camera and airplane animation
//!
//! Each frame the camera rig is pulled toward the curve point for the
//! current scroll progress and turned to face back along the path, while the
//! airplane banks into upcoming turns. Everything is smoothed with
//! exponential decay so the output never jumps, whatever the frame rate.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use glide_core::spline::rotate_around_axis;
use glide_core::{CatmullRomCurve, GlideError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::blend::{
    euler_xyz_yaw, look_at_rotation, smooth_direction, smooth_quat, smooth_vec3, with_roll,
};
use crate::state::{AirplaneState, CameraState};

/// Tuning constants for [`PathAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Curve parameter offset of the camera's look target.
    pub camera_lookahead: f32,
    /// Curve parameter offset of the tangent the airplane banks against.
    pub airplane_lookahead: f32,
    /// Convergence rate (per second) of the camera position and look direction.
    pub position_rate: f32,
    /// Convergence rate (per second) of the airplane orientation.
    pub rotation_rate: f32,
    /// Multiplier exaggerating the raw bank angle.
    pub bank_gain: f32,
    /// Bank angle limit in degrees, applied symmetrically.
    pub max_bank_degrees: f32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            camera_lookahead: 0.008,
            airplane_lookahead: 0.02,
            position_rate: 24.0,
            rotation_rate: 2.0,
            bank_gain: 2.4,
            max_bank_degrees: 35.0,
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("camera_lookahead", self.camera_lookahead),
            ("airplane_lookahead", self.airplane_lookahead),
            ("position_rate", self.position_rate),
            ("rotation_rate", self.rotation_rate),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GlideError::InvalidConfig(format!(
                    "animator.{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }
        if !self.bank_gain.is_finite() {
            return Err(GlideError::InvalidConfig(format!(
                "animator.bank_gain must be finite, got {}",
                self.bank_gain
            )));
        }
        if !(0.0..=180.0).contains(&self.max_bank_degrees) {
            return Err(GlideError::InvalidConfig(format!(
                "animator.max_bank_degrees must be between 0 and 180, got {}",
                self.max_bank_degrees
            )));
        }
        Ok(())
    }
}

/// Instantaneous, unsmoothed targets for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTargets {
    /// Curve point at the current progress.
    pub point: Vec3,
    /// Unit direction from the lookahead point back to `point`.
    pub look_direction: Vec3,
    /// Clamped bank angle in degrees.
    pub bank_degrees: f32,
}

/// Drives a camera rig and an airplane along a fixed curve from scroll progress.
///
/// Owns the curve and the current camera/airplane state. The host calls
/// [`update`](Self::update) once per frame and hands the returned states to
/// its renderer.
#[derive(Debug, Clone)]
pub struct PathAnimator {
    curve: CatmullRomCurve,
    config: AnimatorConfig,
    camera: CameraState,
    airplane: AirplaneState,
}

impl PathAnimator {
    /// Centripetal curve through `points` with default tuning.
    ///
    /// Fails with [`GlideError::InvalidConfig`] for fewer than two points.
    pub fn new(points: Vec<Vec3>) -> Result<Self> {
        Self::with_config(CatmullRomCurve::centripetal(points)?, AnimatorConfig::default())
    }

    pub fn with_config(curve: CatmullRomCurve, config: AnimatorConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "Path animator ready: {} control points, {:?}",
            curve.points().len(),
            config
        );
        Ok(Self {
            curve,
            config,
            camera: CameraState::default(),
            airplane: AirplaneState::default(),
        })
    }

    pub fn curve(&self) -> &CatmullRomCurve {
        &self.curve
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn airplane(&self) -> &AirplaneState {
        &self.airplane
    }

    /// Curve position at `t` (clamped to [0, 1]).
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.curve.point_at(t)
    }

    /// Unit curve tangent at `t` (clamped to [0, 1]).
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        self.curve.tangent_at(t)
    }

    /// The path polyline: `divisions + 1` evenly parametrised points.
    pub fn sample_points(&self, divisions: usize) -> Vec<Vec3> {
        self.curve.sample_points(divisions)
    }

    /// Replace the owned state, e.g. when restoring a saved view.
    pub fn set_state(&mut self, camera: CameraState, airplane: AirplaneState) {
        self.camera = camera;
        self.airplane = airplane;
    }

    /// Jump straight to the targets for `progress`, skipping smoothing.
    pub fn snap(&mut self, progress: f32) {
        let targets = self.targets(progress);
        let camera = camera_at(targets.point, targets.look_direction);
        let airplane = AirplaneState {
            orientation: with_roll(self.airplane.orientation, targets.bank_degrees.to_radians()),
            bank_degrees: targets.bank_degrees,
        };
        self.set_state(camera, airplane);
    }

    /// Advance the owned state by one frame and return it.
    pub fn update(&mut self, progress: f32, dt: f32) -> (CameraState, AirplaneState) {
        let (camera, airplane) = self.step(progress, dt, &self.camera, &self.airplane);
        self.camera = camera;
        self.airplane = airplane;
        (camera, airplane)
    }

    /// One frame of smoothing from the given state, without touching `self`.
    pub fn step(
        &self,
        progress: f32,
        dt: f32,
        camera: &CameraState,
        airplane: &AirplaneState,
    ) -> (CameraState, AirplaneState) {
        // No elapsed time, no convergence
        if dt.is_nan() || dt <= 0.0 {
            return (*camera, *airplane);
        }

        let targets = self.targets(progress);

        let position = smooth_vec3(camera.position, targets.point, self.config.position_rate, dt);
        let look_direction = smooth_direction(
            camera.look_direction,
            targets.look_direction,
            self.config.position_rate,
            dt,
        );

        let target_orientation = with_roll(airplane.orientation, targets.bank_degrees.to_radians());
        let orientation = smooth_quat(
            airplane.orientation,
            target_orientation,
            self.config.rotation_rate,
            dt,
        );

        (
            camera_at(position, look_direction),
            AirplaneState {
                orientation,
                bank_degrees: targets.bank_degrees,
            },
        )
    }

    /// Unsmoothed targets for `progress` (negative progress counts as 0).
    pub fn targets(&self, progress: f32) -> FrameTargets {
        let progress = if progress.is_nan() { 0.0 } else { progress.max(0.0) };

        let point = self.curve.point_at(progress);
        let look_direction = self.look_direction(progress, point);
        let bank_degrees = self.bank_degrees(progress, point, look_direction);

        FrameTargets {
            point,
            look_direction,
            bank_degrees,
        }
    }

    /// Direction from the camera lookahead point back to `point`.
    ///
    /// Near the end of the curve the lookahead clamps onto `point` itself; the
    /// reversed tangent stands in for the vanished difference.
    fn look_direction(&self, progress: f32, point: Vec3) -> Vec3 {
        let ahead_t = (progress + self.config.camera_lookahead).clamp(0.0, 1.0);
        let back = point - self.curve.point_at(ahead_t);
        if back.length_squared() > 1e-12 {
            back.normalize()
        } else {
            debug!("Camera lookahead collapsed at progress {}", progress);
            -self.curve.tangent_at(progress)
        }
    }

    /// Bank angle (degrees) for the airplane, clamped to the configured limit.
    ///
    /// The upcoming tangent is expressed relative to a reference frame facing
    /// `look_direction`; its heading off straight-ahead becomes the roll.
    fn bank_degrees(&self, progress: f32, point: Vec3, look_direction: Vec3) -> f32 {
        // Lookahead may exceed 1, the curve clamps it
        let tangent = self.curve.tangent_at(progress + self.config.airplane_lookahead);

        let reference = look_at_rotation(point, point + look_direction, Vec3::Y);
        let yaw = euler_xyz_yaw(&reference);
        let local = rotate_around_axis(tangent, Vec3::Y, -yaw);

        let angle = (-local.z).atan2(local.x) - FRAC_PI_2;
        let degrees = angle.to_degrees() * self.config.bank_gain;
        let limit = self.config.max_bank_degrees;
        degrees.clamp(-limit, limit)
    }
}

/// Camera rig at `position` whose +Z axis faces along `look_direction`.
fn camera_at(position: Vec3, look_direction: Vec3) -> CameraState {
    let rotation = look_at_rotation(position, position + look_direction, Vec3::Y);
    CameraState {
        position,
        look_direction,
        orientation: Quat::from_mat3(&rotation).normalize(),
    }
}
