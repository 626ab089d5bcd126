//! csv-dataset CLI
//!
//! Command-line interface over the dataset codec.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- inspect data.csv
//! cargo run -- --strategy streaming inspect data.csv
//! cargo run -- normalize data.csv normalized.csv
//! RUST_LOG=off cargo run -- normalize data.csv normalized.csv
//! ```
//!
//! Skipped malformed rows are reported as warnings on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input missing or empty, file not readable, output not writable, etc.)

use csv_dataset::cli::{self, Outcome};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging();

    let mut output = std::io::stdout();
    match cli::run(&args, &mut output) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::NoData) => {
            eprintln!("Error: no data (input file missing or empty)");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
