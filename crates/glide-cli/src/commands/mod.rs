//! CLI command implementations

pub mod info;
pub mod sample;
pub mod simulate;
pub mod validate;

use anyhow::{Context, Result};
use glide_path::{load_flight_path, FlightPath};
use log::debug;
use std::path::Path;

/// Load the flight path at `path`, or the built-in route when none is given.
pub fn load_or_default(path: Option<&str>) -> Result<FlightPath> {
    match path {
        Some(p) => load_flight_path(Path::new(p))
            .with_context(|| format!("Failed to load flight path '{}'", p)),
        None => {
            debug!("No flight path given, using the built-in route");
            Ok(FlightPath::default_route())
        }
    }
}
