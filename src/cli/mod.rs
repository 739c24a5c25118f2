//! CLI interface for tiltmap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tiltmap::Axis;

/// Parameter registry with motion-sensor mapping
#[derive(Parser)]
#[command(name = "tiltmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the parameters of the built-in demo patch
    Params,

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "tiltmap.yaml")]
        config: PathBuf,
    },

    /// Sweep one sensor axis and print the resulting parameter values
    Simulate {
        /// Configuration file with sensor mappings (optional)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Axis to sweep (x, y or z)
        #[arg(short, long, default_value = "x", value_parser = parse_axis)]
        axis: Axis,

        /// First axis reading
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        from: f64,

        /// Last axis reading
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        to: f64,

        /// Number of readings in the sweep
        #[arg(short, long, default_value = "9")]
        steps: usize,
    },

    /// Drive the demo patch from a MIDI controller until Ctrl-C
    Listen {
        /// Configuration file path
        #[arg(short, long, default_value = "tiltmap.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}

fn parse_axis(raw: &str) -> Result<Axis, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "x" | "0" => Ok(Axis::X),
        "y" | "1" => Ok(Axis::Y),
        "z" | "2" => Ok(Axis::Z),
        other => Err(format!("unknown axis '{}', expected x, y or z", other)),
    }
}
