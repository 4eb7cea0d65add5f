//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Biotrend - Analyze Aadhaar biometric-update records and render summary charts
#[derive(Parser, Debug)]
#[command(name = "biotrend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with the raw biometric-update export.
    /// Can also be set through the BIOTREND_INPUT environment variable.
    #[arg(
        short,
        long,
        env = "BIOTREND_INPUT",
        default_value = "aadhaar_biometric_FULL.csv"
    )]
    pub input: PathBuf,

    /// Directory the six chart PNGs are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}
