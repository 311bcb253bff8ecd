//! Glide CLI - Command-line interface for Glide flight paths

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{info, sample, simulate, validate};

#[derive(Parser)]
#[command(name = "glide")]
#[command(about = "Scroll-driven flythrough path animation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show curve and tuning details of a flight path
    Info {
        /// Path to a .path.toml file (built-in route if omitted)
        path: Option<String>,
    },

    /// Validate a flight path file
    Validate {
        /// Path to a .path.toml file
        path: String,
    },

    /// Print the path polyline
    Sample {
        /// Path to a .path.toml file (built-in route if omitted)
        path: Option<String>,

        /// Number of divisions (defaults to sampling.line_points)
        #[arg(long)]
        points: Option<usize>,

        /// Output format (json or csv)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Scroll through the path headlessly and print per-frame transforms
    Simulate {
        /// Path to a .path.toml file (built-in route if omitted)
        path: Option<String>,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Seconds to scroll from start to end
        #[arg(long, default_value = "10")]
        duration: f64,

        /// Print every Nth frame
        #[arg(long, default_value = "1")]
        every: usize,

        /// Output format (text, json or csv)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { path } => info::run(path.as_deref()),
        Commands::Validate { path } => validate::run(&path),
        Commands::Sample {
            path,
            points,
            format,
        } => sample::run(path.as_deref(), points, &format),
        Commands::Simulate {
            path,
            fps,
            duration,
            every,
            format,
        } => simulate::run(simulate::SimulateArgs {
            path,
            fps,
            duration,
            every,
            format,
        }),
    }
}
