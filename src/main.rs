use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use generate_discrepancies::args::{Args, USAGE_HINT};
use generate_discrepancies::{Injector, RngSampler, logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_error(&e),
    };

    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config().context("invalid options")?;
    let sampler = RngSampler::from_seed(config.seed);

    let tally = Injector::new(config, sampler)
        .run(&args.directory)
        .with_context(|| {
            format!("failed to inject discrepancies into {}", args.directory.display())
        })?;

    presentation::print_summary(&tally, args.format).context("failed to print summary")?;
    Ok(())
}

/// `--help`/`--version` exit 0; every other parse failure exits 1.
fn usage_error(e: &clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
            eprintln!("{USAGE_HINT}");
            let _ = e.print();
            ExitCode::FAILURE
        }
        _ => {
            let _ = e.print();
            ExitCode::FAILURE
        }
    }
}
