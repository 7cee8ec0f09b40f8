use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Parser, Debug)]
#[command(
    name = "parkassist",
    version,
    about = "Parking assistant: sensor verdicts, space scanning and guided parking"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full assisted parking: vehicle setup, space scan, then guidance.
    Run {
        #[arg(long, value_parser = parse_positive)]
        length: Option<f64>,
        #[arg(long, value_parser = parse_positive)]
        width: Option<f64>,
        #[arg(long, value_enum)]
        parking: Option<ParkingKind>,
        #[arg(long, value_enum)]
        mode: Option<DrivingMode>,
        #[arg(long, allow_hyphen_values = true)]
        count: Option<i64>,
    },
    /// Guidance session only, reading sensor triples from stdin.
    Guide {
        #[arg(long, value_enum, default_value_t = DrivingMode::Forward)]
        mode: DrivingMode,
        #[arg(long, value_enum, default_value_t = ParkingKind::Parallel)]
        parking: ParkingKind,
    },
    /// Scan candidate spaces (sizes read from stdin) for the first that fits.
    Scan {
        #[arg(long, value_enum)]
        parking: ParkingKind,
        #[arg(long, value_parser = parse_positive)]
        length: f64,
        #[arg(long, value_parser = parse_positive)]
        width: f64,
        #[arg(long, allow_hyphen_values = true)]
        count: Option<i64>,
    },
    /// Classify a single sensor triple.
    Classify {
        #[arg(long, value_parser = parse_non_negative)]
        left: f64,
        #[arg(long, value_parser = parse_non_negative)]
        center: f64,
        #[arg(long, value_parser = parse_non_negative)]
        right: f64,
    },
    /// Minimum space needed for a vehicle.
    Space {
        #[arg(long, value_enum)]
        parking: ParkingKind,
        #[arg(long, value_parser = parse_positive)]
        length: f64,
        #[arg(long, value_parser = parse_positive)]
        width: f64,
    },
    /// Show the effective configuration.
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParkingKind {
    Parallel,
    Perpendicular,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DrivingMode {
    Forward,
    Reverse,
}

impl fmt::Display for ParkingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingKind::Parallel => f.write_str("PARALLEL"),
            ParkingKind::Perpendicular => f.write_str("PERPENDICULAR"),
        }
    }
}

impl fmt::Display for DrivingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrivingMode::Forward => f.write_str("FORWARD"),
            DrivingMode::Reverse => f.write_str("REVERSE"),
        }
    }
}

fn parse_non_negative(raw: &str) -> Result<f64, String> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {}", raw))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("expected a non-negative number, got {}", raw));
    }
    Ok(v)
}

fn parse_positive(raw: &str) -> Result<f64, String> {
    let v = parse_non_negative(raw)?;
    if v == 0.0 {
        return Err("expected a positive number, got 0".to_string());
    }
    Ok(v)
}
