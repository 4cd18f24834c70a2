// src/main.rs
//! nmea2gpx - convert NMEA 0183 GPS logs into GPX 1.1 tracks

use anyhow::{Context, Result};
use clap::Parser;
use nmea2gpx::{convert, FilterConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nmea2gpx", version, about = "Convert NMEA GPS logs to GPX tracks")]
struct Args {
    /// NMEA log file to convert
    input: PathBuf,

    /// Output path (defaults to the input path with a .gpx extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Speed cap in km/h used to reject outlier jumps: none, 10 or 100
    #[arg(long, default_value = "none")]
    speed: String,

    /// Keep points at or after this local time (UTC+9), "YYYY-MM-DD HH:MM:SS"
    #[arg(long, default_value = "")]
    start: String,

    /// Keep points at or before this local time (UTC+9), "YYYY-MM-DD HH:MM:SS"
    #[arg(long, default_value = "")]
    end: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let config = FilterConfig::from_strings(&args.speed, &args.start, &args.end);
    let gpx = convert(&content, &config)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("gpx"));
    fs::write(&output, &gpx).with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
