//! Info command

use anyhow::Result;
use glide_path::FlightPath;

/// Divisions used for the length estimate.
const LENGTH_DIVISIONS: usize = 2000;

pub fn run(path: Option<&str>) -> Result<()> {
    let flight_path = super::load_or_default(path)?;
    print!("{}", describe(&flight_path)?);
    Ok(())
}

pub fn describe(flight_path: &FlightPath) -> Result<String> {
    let curve = flight_path.build_curve()?;
    let config = &flight_path.animator;

    let mut out = String::new();
    out.push_str(&format!(
        "Curve:              {:?} (tension {})\n",
        curve.curve_type(),
        curve.tension()
    ));
    out.push_str(&format!("Control points:     {}\n", curve.points().len()));
    out.push_str(&format!(
        "Estimated length:   {:.1}\n",
        curve.length_estimate(LENGTH_DIVISIONS)
    ));
    out.push_str(&format!("Camera lookahead:   {}\n", config.camera_lookahead));
    out.push_str(&format!("Airplane lookahead: {}\n", config.airplane_lookahead));
    out.push_str(&format!("Position rate:      {}/s\n", config.position_rate));
    out.push_str(&format!("Rotation rate:      {}/s\n", config.rotation_rate));
    out.push_str(&format!(
        "Bank:               x{} (max {} deg)\n",
        config.bank_gain, config.max_bank_degrees
    ));
    out.push_str(&format!(
        "Line points:        {}\n",
        flight_path.sampling.line_points
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_default_route() {
        let text = describe(&FlightPath::default_route()).unwrap();
        assert!(text.contains("Centripetal"));
        assert!(text.contains("Control points:     8"));
        assert!(text.contains("max 35 deg"));
    }
}
