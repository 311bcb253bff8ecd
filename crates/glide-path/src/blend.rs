//! Frame-rate independent blending and orientation helpers
//!
//! Smoothing uses exponential decay: each frame moves a fraction
//! `1 - exp(-rate * dt)` of the remaining distance toward the target, so the
//! motion converges at the same speed regardless of frame rate.

use glam::{EulerRot, Mat3, Quat, Vec3};

/// Fraction of the remaining distance to cover in `dt` seconds at `rate` per second.
///
/// Zero for `dt <= 0` or `rate <= 0`, approaches 1 as `dt` grows.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 || rate.is_nan() || rate <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}

/// Exponentially smooth a point toward `target`.
pub fn smooth_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, smoothing_factor(rate, dt))
}

/// Exponentially smooth a unit direction toward `target`, renormalized.
///
/// If the blend passes through zero (opposite directions) the target wins.
pub fn smooth_direction(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    smooth_vec3(current, target, rate, dt).normalize_or(target)
}

/// Spherically smooth an orientation toward `target` (shortest path).
pub fn smooth_quat(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    current.slerp(target, smoothing_factor(rate, dt)).normalize()
}

/// Rotation whose +Z axis points from `eye` toward `target`.
///
/// Object convention (not camera convention, which looks down -Z). Coincident
/// points look down +Z; a direction parallel to `up` is nudged off the pole.
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Mat3 {
    let mut z = target - eye;
    if z.length_squared() == 0.0 {
        z = Vec3::Z;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        if up.z.abs() == 1.0 {
            z.x += 1e-4;
        } else {
            z.z += 1e-4;
        }
        z = z.normalize();
        x = up.cross(z);
    }

    let x = x.normalize();
    let y = z.cross(x);
    Mat3::from_cols(x, y, z)
}

/// Yaw of a rotation matrix as the Y angle of its XYZ Euler decomposition.
///
/// Always within [-π/2, π/2]; beyond that the decomposition flips X and Z instead.
pub fn euler_xyz_yaw(rotation: &Mat3) -> f32 {
    rotation.z_axis.x.clamp(-1.0, 1.0).asin()
}

/// Keep the pitch and yaw (XYZ Euler X and Y) of `orientation`, replace its roll.
pub fn with_roll(orientation: Quat, roll: f32) -> Quat {
    let (pitch, yaw, _) = orientation.to_euler(EulerRot::XYZ);
    Quat::from_euler(EulerRot::XYZ, pitch, yaw, roll)
}
