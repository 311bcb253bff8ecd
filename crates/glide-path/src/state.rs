//! Per-frame animation state handed to the renderer

use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

/// The camera rig: where it is and which way its +Z axis faces.
///
/// `look_direction` points back along the path (from the lookahead point
/// toward the current point); a camera mounted behind the rig and looking
/// down its own -Z therefore sees the path ahead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub position: Vec3,
    /// Unit vector, smoothed every frame.
    pub look_direction: Vec3,
    /// Look-at rotation derived from `position` and `look_direction`.
    pub orientation: Quat,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_direction: Vec3::Z,
            orientation: Quat::IDENTITY,
        }
    }
}

/// The airplane's orientation relative to the camera rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirplaneState {
    pub orientation: Quat,
    /// Clamped bank angle of the most recent target, in degrees.
    pub bank_degrees: f32,
}

impl Default for AirplaneState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            bank_degrees: 0.0,
        }
    }
}

impl AirplaneState {
    /// Current roll (XYZ Euler Z angle) in degrees.
    pub fn roll_degrees(&self) -> f32 {
        let (_, _, roll) = self.orientation.to_euler(EulerRot::XYZ);
        roll.to_degrees()
    }
}

/// One simulated frame, as emitted by the frame driver.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameOutput {
    pub frame: u64,
    /// Seconds since the first frame.
    pub time: f64,
    pub progress: f32,
    pub camera: CameraState,
    pub airplane: AirplaneState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_look_down_plus_z() {
        let camera = CameraState::default();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.orientation * Vec3::Z, camera.look_direction);
    }

    #[test]
    fn roll_degrees_reads_euler_z() {
        let airplane = AirplaneState {
            orientation: Quat::from_euler(EulerRot::XYZ, 0.0, 0.0, 20f32.to_radians()),
            bank_degrees: 20.0,
        };
        assert!((airplane.roll_degrees() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn frame_output_serializes() {
        let output = FrameOutput {
            frame: 3,
            time: 0.05,
            progress: 0.25,
            camera: CameraState::default(),
            airplane: AirplaneState::default(),
        };
        let json = serde_json::to_value(output).unwrap();
        assert_eq!(json["frame"], 3);
        assert_eq!(json["camera"]["position"], serde_json::json!([0.0, 0.0, 0.0]));
        assert_eq!(json["airplane"]["orientation"], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
    }
}
