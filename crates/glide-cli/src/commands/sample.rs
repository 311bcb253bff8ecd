//! Sample command — print the path polyline

use anyhow::Result;
use glide_path::FlightPath;

pub fn run(path: Option<&str>, points: Option<usize>, format: &str) -> Result<()> {
    let flight_path = super::load_or_default(path)?;
    let divisions = points.unwrap_or(flight_path.sampling.line_points);
    println!("{}", render(&flight_path, divisions, format)?);
    Ok(())
}

pub fn render(flight_path: &FlightPath, divisions: usize, format: &str) -> Result<String> {
    let curve = flight_path.build_curve()?;
    let samples = curve.sample_points(divisions);

    let output = match format {
        "json" => serde_json::to_string_pretty(&samples)?,
        "csv" => {
            let mut out = String::from("index,x,y,z");
            for (i, p) in samples.iter().enumerate() {
                out.push_str(&format!("\n{},{},{},{}", i, p.x, p.y, p.z));
            }
            out
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_all_points() {
        let csv = render(&FlightPath::default_route(), 10, "csv").unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "index,x,y,z");
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with("0,"));
    }

    #[test]
    fn json_is_array_of_triples() {
        let json = render(&FlightPath::default_route(), 4, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[0].as_array().unwrap().len(), 3);
    }

    #[test]
    fn unknown_format_fails() {
        assert!(render(&FlightPath::default_route(), 4, "xml").is_err());
    }
}
