// CLI module
// Command-line interface, argument parsing and command execution

mod args;

pub use args::{CliArgs, Command, StrategyType};

use crate::io::save;
use crate::strategy::create_loader;
use crate::types::DatasetError;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Result of a command that completed without a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran to completion
    Done,
    /// The input file was missing or held no rows
    NoData,
}

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or --help),
/// clap displays an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so skipped-row
/// diagnostics are visible without any configuration.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();
}

/// Execute a parsed command, writing its report to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<Outcome, DatasetError> {
    let loader = create_loader(args.strategy);

    match &args.command {
        Command::Inspect { input_file } => {
            let Some(dataset) = loader.load(input_file)? else {
                return Ok(Outcome::NoData);
            };

            writeln!(output, "header: {}", dataset.header)?;
            writeln!(output, "fields: {}", dataset.field_count())?;
            writeln!(output, "rows: {}", dataset.len())?;
        }
        Command::Normalize {
            input_file,
            output_file,
        } => {
            let Some(dataset) = loader.load(input_file)? else {
                return Ok(Outcome::NoData);
            };

            save(output_file, &dataset)?;
            writeln!(
                output,
                "wrote {} rows to {}",
                dataset.len(),
                output_file.display()
            )?;
        }
    }

    Ok(Outcome::Done)
}
