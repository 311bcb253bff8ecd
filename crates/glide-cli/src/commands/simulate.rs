//! Simulate command — headless flythrough

use anyhow::{Context, Result};
use glide_path::{run_sweep, FlightSystem, FrameOutput, Sweep};

pub struct SimulateArgs {
    pub path: Option<String>,
    pub fps: f64,
    pub duration: f64,
    pub every: usize,
    pub format: String,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let flight_path = super::load_or_default(args.path.as_deref())?;
    let mut system = FlightSystem::from_flight_path(&flight_path)?;
    let outputs = run_sweep(
        &mut system,
        Sweep {
            fps: args.fps,
            duration: args.duration,
        },
    )
    .context("Simulation failed")?;

    println!("{}", render(&outputs, args.every, &args.format)?);
    Ok(())
}

/// Format every `every`-th frame; the last frame is always included.
pub fn render(outputs: &[FrameOutput], every: usize, format: &str) -> Result<String> {
    let every = every.max(1);
    let last = outputs.len().saturating_sub(1);
    let selected: Vec<&FrameOutput> = outputs
        .iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0 || *i == last)
        .map(|(_, o)| o)
        .collect();

    let lines: Vec<String> = match format {
        "json" => selected
            .iter()
            .map(|o| serde_json::to_string(o))
            .collect::<std::result::Result<_, _>>()?,
        "csv" => std::iter::once(CSV_HEADER.to_string())
            .chain(selected.iter().map(|o| csv_row(o)))
            .collect(),
        "text" => selected.iter().map(|o| text_row(o)).collect(),
        _ => anyhow::bail!("Unknown format: {}", format),
    };
    Ok(lines.join("\n"))
}

const CSV_HEADER: &str =
    "frame,time,progress,x,y,z,look_x,look_y,look_z,bank_degrees,roll_degrees";

fn csv_row(o: &FrameOutput) -> String {
    let p = o.camera.position;
    let l = o.camera.look_direction;
    format!(
        "{},{:.6},{:.6},{},{},{},{},{},{},{},{}",
        o.frame,
        o.time,
        o.progress,
        p.x,
        p.y,
        p.z,
        l.x,
        l.y,
        l.z,
        o.airplane.bank_degrees,
        o.airplane.roll_degrees()
    )
}

fn text_row(o: &FrameOutput) -> String {
    let p = o.camera.position;
    format!(
        "#{:<5} t={:>7.3}s  progress={:.4}  camera=({:>8.2}, {:>6.2}, {:>9.2})  bank={:>6.2}°  roll={:>6.2}°",
        o.frame,
        o.time,
        o.progress,
        p.x,
        p.y,
        p.z,
        o.airplane.bank_degrees,
        o.airplane.roll_degrees()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_path::FlightPath;

    fn outputs() -> Vec<FrameOutput> {
        let mut system = FlightSystem::from_flight_path(&FlightPath::default_route()).unwrap();
        run_sweep(
            &mut system,
            Sweep {
                fps: 10.0,
                duration: 1.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn csv_keeps_every_nth_and_last() {
        let outputs = outputs();
        assert_eq!(outputs.len(), 11);
        let csv = render(&outputs, 4, "csv").unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        // header + frames 0, 4, 8, 10
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[4].starts_with("10,"));
    }

    #[test]
    fn json_lines_parse() {
        let outputs = outputs();
        let json = render(&outputs, 1, "json").unwrap();
        for line in json.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["camera"]["position"].is_array());
        }
        assert_eq!(json.lines().count(), 11);
    }

    #[test]
    fn text_rows_and_bad_format() {
        let outputs = outputs();
        assert!(render(&outputs, 5, "text").unwrap().starts_with("#0"));
        assert!(render(&outputs, 1, "yaml").is_err());
    }
}
