//! Pure spline math — open Catmull-Rom curve evaluation.
//!
//! The curve is parametrised by a global `t` in [0, 1] spread evenly over the
//! control-point segments (not by arc length). Parameters outside that range
//! are clamped, so lookahead arithmetic can freely overshoot either end.

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{GlideError, Result};

/// Knot spacings below this are treated as coincident points.
const MIN_KNOT_SPACING: f32 = 1e-4;

/// Parameter step used for finite-difference tangents.
const TANGENT_DELTA: f32 = 1e-4;

/// Knot parametrisation of the Catmull-Rom spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// Knots spaced by the square root of the chord length. No cusps or
    /// self-intersections within a segment.
    #[default]
    Centripetal,
    /// Knots spaced by the chord length.
    Chordal,
    /// Evenly spaced knots; tangents scaled by the curve's tension.
    Uniform,
}

impl CurveType {
    /// Exponent applied to the chord length for non-uniform knot spacing.
    fn knot_exponent(self) -> Option<f32> {
        match self {
            CurveType::Centripetal => Some(0.5),
            CurveType::Chordal => Some(1.0),
            CurveType::Uniform => None,
        }
    }
}

/// Cubic `c0 + c1·t + c2·t² + c3·t³`, built from a Hermite segment.
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, tension: f32) -> Self {
        Self::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1))
    }

    fn non_uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, dt0: f32, dt1: f32, dt2: f32) -> Self {
        let t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
        let t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;
        Self::hermite(p1, p2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}

/// An open Catmull-Rom curve through a fixed list of control points.
///
/// Immutable after construction. Missing neighbours at the two ends are
/// phantom points reflected through the first and last control points.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    curve_type: CurveType,
    tension: f32,
}

impl CatmullRomCurve {
    /// Default tension, only used by [`CurveType::Uniform`].
    pub const DEFAULT_TENSION: f32 = 0.5;

    /// Build a curve through `points`.
    ///
    /// Fails with [`GlideError::InvalidConfig`] for fewer than two points,
    /// non-finite coordinates or a non-finite tension.
    pub fn new(points: Vec<Vec3>, curve_type: CurveType, tension: f32) -> Result<Self> {
        if points.len() < 2 {
            return Err(GlideError::InvalidConfig(format!(
                "curve needs at least 2 control points, got {}",
                points.len()
            )));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(GlideError::InvalidConfig(format!(
                "control point {} has non-finite coordinates: {:?}",
                i, points[i]
            )));
        }
        if !tension.is_finite() {
            return Err(GlideError::InvalidConfig(format!(
                "curve tension must be finite, got {}",
                tension
            )));
        }

        debug!(
            "Built {:?} Catmull-Rom curve through {} control points",
            curve_type,
            points.len()
        );

        Ok(Self {
            points,
            curve_type,
            tension,
        })
    }

    /// Centripetal curve with the default tension.
    pub fn centripetal(points: Vec<Vec3>) -> Result<Self> {
        Self::new(points, CurveType::Centripetal, Self::DEFAULT_TENSION)
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    /// Position on the curve at `t`, clamped to [0, 1].
    pub fn point_at(&self, t: f32) -> Vec3 {
        let t = clamp_parameter(t);
        let n = self.points.len();

        let scaled = (n - 1) as f32 * t;
        let mut seg = scaled.floor() as usize;
        let mut weight = scaled - seg as f32;
        if seg >= n - 1 {
            seg = n - 2;
            weight = 1.0;
        }

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };

        let poly = match self.curve_type.knot_exponent() {
            Some(exponent) => {
                // distance_squared^(exponent / 2) == distance^exponent
                let pow = exponent * 0.5;
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);

                if dt1 < MIN_KNOT_SPACING {
                    dt1 = 1.0;
                }
                if dt0 < MIN_KNOT_SPACING {
                    dt0 = dt1;
                }
                if dt2 < MIN_KNOT_SPACING {
                    dt2 = dt1;
                }

                CubicPoly::non_uniform(p0, p1, p2, p3, dt0, dt1, dt2)
            }
            None => CubicPoly::uniform(p0, p1, p2, p3, self.tension),
        };

        poly.eval(weight)
    }

    /// Unit direction of travel at `t`, clamped to [0, 1].
    ///
    /// Central finite difference, one-sided at the ends. A curve collapsed to
    /// a single point reports [`Vec3::NEG_Z`] (forward).
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let t = clamp_parameter(t);
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.point_at(t2) - self.point_at(t1)).normalize_or(Vec3::NEG_Z)
    }

    /// `divisions + 1` points at evenly spaced parameters, both ends included.
    pub fn sample_points(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }

    /// Polyline length through `divisions + 1` samples.
    pub fn length_estimate(&self, divisions: usize) -> f32 {
        self.sample_points(divisions)
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

/// Clamp a curve parameter into [0, 1]; NaN maps to the start.
pub fn clamp_parameter(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Rotate a vector around an axis by an angle in radians (Rodrigues' formula).
pub fn rotate_around_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let (sin_a, cos_a) = angle.sin_cos();
    v * cos_a + axis.cross(v) * sin_a + axis * axis.dot(v) * (1.0 - cos_a)
}
