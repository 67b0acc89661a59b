// src/args.rs
use crate::config::{DEFAULT_SUFFIX_LEN, InjectConfig};
use crate::error::Result;
use crate::outcome::Thresholds;
use crate::presentation::OutputFormat;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

pub const USAGE_HINT: &str = "Please provide the directory path to generate discrepancies in";

#[derive(Parser, Debug)]
#[command(
    name = "generate_discrepancies",
    version,
    about = "Randomly delete or grow a small share of files to exercise integrity checkers"
)]
pub struct Args {
    /// Directory to inject discrepancies into
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Seed for the random generator (unseeded runs differ every time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Samples at or below this value grow the file
    #[arg(long, default_value_t = Thresholds::DEFAULT_MISMATCH, help_heading = "Rates")]
    pub mismatch_below: f64,

    /// Samples at or below this value (and above --mismatch-below) delete the file
    #[arg(long, default_value_t = Thresholds::DEFAULT_MISSING, help_heading = "Rates")]
    pub missing_below: f64,

    /// Number of letters appended to a mismatched file
    #[arg(long, default_value_t = DEFAULT_SUFFIX_LEN, value_parser = parse_positive_usize)]
    pub suffix_len: usize,

    /// Summary format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log progress to stderr (-v info, -vv per-file)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// # Errors
    /// Fails when the thresholds are out of order or out of range.
    pub fn to_config(&self) -> Result<InjectConfig> {
        InjectConfig::from_parts(
            self.mismatch_below,
            self.missing_below,
            self.suffix_len,
            self.seed,
        )
    }
}

fn parse_positive_usize(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
