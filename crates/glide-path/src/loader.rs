//! TOML-based flight path loading

use std::path::Path;

use glam::Vec3;
use glide_core::{CatmullRomCurve, CurveType, GlideError, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::animator::{AnimatorConfig, PathAnimator};

/// Spacing along -Z between the control points of the default route.
pub const ROUTE_SEGMENT_LENGTH: f32 = 250.0;

/// Curve shape settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    #[serde(rename = "type")]
    pub curve_type: CurveType,
    pub tension: f32,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            curve_type: CurveType::Centripetal,
            tension: CatmullRomCurve::DEFAULT_TENSION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: [f32; 3],
}

/// Path polyline sampling, used for the trail drawn along the route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    pub line_points: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self { line_points: 2000 }
    }
}

/// A flight path definition, as stored in a `.path.toml` file.
///
/// ```toml
/// [curve]
/// type = "centripetal"
/// tension = 0.5
///
/// [[control_points]]
/// position = [0.0, 0.0, 0.0]
///
/// [[control_points]]
/// position = [0.0, 0.0, -250.0]
///
/// [animator]
/// bank_gain = 2.4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    #[serde(default)]
    pub curve: CurveSettings,
    pub control_points: Vec<ControlPoint>,
    #[serde(default)]
    pub animator: AnimatorConfig,
    #[serde(default)]
    pub sampling: SamplingSettings,
}

impl FlightPath {
    /// The built-in route: eight points 250 units apart along -Z, weaving
    /// left and right before settling near the centre line.
    pub fn default_route() -> Self {
        let offsets = [0.0, 0.0, 100.0, -100.0, 100.0, 5.0, 7.0, 5.0];
        let control_points = offsets
            .iter()
            .enumerate()
            .map(|(i, x)| ControlPoint {
                position: [*x, 0.0, -ROUTE_SEGMENT_LENGTH * i as f32],
            })
            .collect();

        Self {
            curve: CurveSettings::default(),
            control_points,
            animator: AnimatorConfig::default(),
            sampling: SamplingSettings::default(),
        }
    }

    /// Parse and validate a flight path from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let path: FlightPath = toml::from_str(content)?;
        path.validate()?;
        Ok(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.control_points.len() < 2 {
            return Err(GlideError::InvalidConfig(format!(
                "flight path needs at least 2 control points, got {}",
                self.control_points.len()
            )));
        }
        for (i, point) in self.control_points.iter().enumerate() {
            if point.position.iter().any(|c| !c.is_finite()) {
                return Err(GlideError::InvalidConfig(format!(
                    "control point {} has non-finite coordinates: {:?}",
                    i, point.position
                )));
            }
        }
        if !self.curve.tension.is_finite() {
            return Err(GlideError::InvalidConfig(format!(
                "curve.tension must be finite, got {}",
                self.curve.tension
            )));
        }
        if self.sampling.line_points == 0 {
            return Err(GlideError::InvalidConfig(
                "sampling.line_points must be at least 1".into(),
            ));
        }
        self.animator.validate()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.control_points
            .iter()
            .map(|p| Vec3::from_array(p.position))
            .collect()
    }

    pub fn build_curve(&self) -> Result<CatmullRomCurve> {
        CatmullRomCurve::new(self.positions(), self.curve.curve_type, self.curve.tension)
    }

    pub fn build_animator(&self) -> Result<PathAnimator> {
        PathAnimator::with_config(self.build_curve()?, self.animator)
    }
}

/// Load a flight path from a `.path.toml` file.
pub fn load_flight_path(path: &Path) -> Result<FlightPath> {
    let content = std::fs::read_to_string(path)?;
    let flight_path = FlightPath::from_toml_str(&content).map_err(|e| match e {
        GlideError::TomlParseError(msg) => {
            GlideError::TomlParseError(format!("{}: {}", path.display(), msg))
        }
        GlideError::InvalidConfig(msg) => {
            GlideError::InvalidConfig(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;

    info!(
        "Loaded flight path {} ({} control points)",
        path.display(),
        flight_path.control_points.len()
    );
    Ok(flight_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_path() {
        let toml_str = r#"
[[control_points]]
position = [0.0, 0.0, 0.0]

[[control_points]]
position = [0.0, 0.0, -10.0]
"#;
        let path = FlightPath::from_toml_str(toml_str).unwrap();
        assert_eq!(path.control_points.len(), 2);
        assert_eq!(path.curve, CurveSettings::default());
        assert_eq!(path.animator, AnimatorConfig::default());
        assert_eq!(path.sampling.line_points, 2000);
    }

    #[test]
    fn parse_full_path() {
        let toml_str = r#"
[curve]
type = "uniform"
tension = 0.5

[[control_points]]
position = [0.0, 0.0, 0.0]

[[control_points]]
position = [1, 2, 3]

[animator]
position_rate = 12.0
max_bank_degrees = 20.0

[sampling]
line_points = 500
"#;
        let path = FlightPath::from_toml_str(toml_str).unwrap();
        assert_eq!(path.curve.curve_type, CurveType::Uniform);
        assert_eq!(path.control_points[1].position, [1.0, 2.0, 3.0]);
        assert_eq!(path.animator.position_rate, 12.0);
        assert_eq!(path.animator.rotation_rate, 2.0);
        assert_eq!(path.animator.max_bank_degrees, 20.0);
        assert_eq!(path.sampling.line_points, 500);

        let animator = path.build_animator().unwrap();
        assert_eq!(animator.curve().curve_type(), CurveType::Uniform);
    }

    #[test]
    fn single_point_is_invalid() {
        let toml_str = r#"
[[control_points]]
position = [0.0, 0.0, 0.0]
"#;
        let err = FlightPath::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, GlideError::InvalidConfig(_)));
    }

    #[test]
    fn bad_values_are_invalid() {
        let toml_str = r#"
[[control_points]]
position = [0.0, 0.0, 0.0]

[[control_points]]
position = [0.0, 0.0, -5.0]

[animator]
rotation_rate = -2.0
"#;
        assert!(matches!(
            FlightPath::from_toml_str(toml_str).unwrap_err(),
            GlideError::InvalidConfig(_)
        ));

        let mut path = FlightPath::default_route();
        path.sampling.line_points = 0;
        assert!(path.validate().is_err());
    }

    #[test]
    fn unknown_curve_type_is_parse_error() {
        let toml_str = r#"
[curve]
type = "bezier"

[[control_points]]
position = [0.0, 0.0, 0.0]
"#;
        assert!(matches!(
            FlightPath::from_toml_str(toml_str).unwrap_err(),
            GlideError::TomlParseError(_)
        ));
    }

    #[test]
    fn default_route_shape() {
        let route = FlightPath::default_route();
        route.validate().unwrap();
        assert_eq!(route.control_points.len(), 8);
        assert_eq!(route.control_points[2].position, [100.0, 0.0, -500.0]);
        assert_eq!(route.control_points[7].position, [5.0, 0.0, -1750.0]);
    }

    #[test]
    fn bundled_route_file_matches_default() {
        let content = include_str!("../../../paths/default.path.toml");
        let path = FlightPath::from_toml_str(content).unwrap();
        assert_eq!(path, FlightPath::default_route());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_flight_path(Path::new("does/not/exist.path.toml")).unwrap_err();
        assert!(matches!(err, GlideError::IoError(_)));
    }
}
