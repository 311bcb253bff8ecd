//! Validate command

use anyhow::{Context, Result};
use glide_path::load_flight_path;
use std::path::Path;

pub fn run(path: &str) -> Result<()> {
    let flight_path = load_flight_path(Path::new(path))
        .with_context(|| format!("Invalid flight path '{}'", path))?;
    // Curve construction has its own checks on top of the file validation
    flight_path
        .build_animator()
        .with_context(|| format!("Invalid flight path '{}'", path))?;

    println!(
        "{}: OK ({} control points)",
        path,
        flight_path.control_points.len()
    );
    Ok(())
}
