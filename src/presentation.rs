// src/presentation.rs
use crate::error::Result;
use crate::outcome::Tally;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonSummary {
    #[serde(flatten)]
    tally: Tally,
    total: u64,
}

/// Render the end-of-run summary. Never ends with a newline.
///
/// # Errors
/// Only JSON serialisation can fail.
pub fn render(tally: &Tally, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tally.to_string()),
        OutputFormat::Json => {
            let summary = JsonSummary {
                tally: *tally,
                total: tally.total(),
            };
            Ok(serde_json::to_string(&summary)?)
        }
    }
}

pub fn print_summary(tally: &Tally, format: OutputFormat) -> Result<()> {
    println!("{}", render(tally, format)?);
    Ok(())
}
