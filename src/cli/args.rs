use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Load, inspect and re-save fully quoted CSV datasets
#[derive(Parser, Debug)]
#[command(name = "csv-dataset")]
#[command(about = "Load, inspect and re-save fully quoted CSV datasets", long_about = None)]
pub struct CliArgs {
    /// Load strategy used to read input files
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "two-pass",
        global = true,
        help = "Load strategy: 'two-pass' counts rows before reading, 'streaming' reads once"
    )]
    pub strategy: StrategyType,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the binary
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the header and the number of body rows
    Inspect {
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,
    },

    /// Load a file and save it back with every field quoted, dropping malformed rows
    Normalize {
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,

        #[arg(value_name = "OUTPUT", help = "Path of the CSV file to write")]
        output_file: PathBuf,
    },
}

/// Available load strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    TwoPass,
    Streaming,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "inspect", "input.csv"], StrategyType::TwoPass)]
    #[case::explicit_two_pass(&["program", "--strategy", "two-pass", "inspect", "input.csv"], StrategyType::TwoPass)]
    #[case::explicit_streaming(&["program", "--strategy", "streaming", "inspect", "input.csv"], StrategyType::Streaming)]
    #[case::strategy_after_subcommand(&["program", "inspect", "input.csv", "--strategy", "streaming"], StrategyType::Streaming)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[test]
    fn test_inspect_parsing() {
        let parsed = CliArgs::try_parse_from(["program", "inspect", "data.csv"]).unwrap();
        assert_eq!(
            parsed.command,
            Command::Inspect {
                input_file: PathBuf::from("data.csv")
            }
        );
    }

    #[test]
    fn test_normalize_parsing() {
        let parsed =
            CliArgs::try_parse_from(["program", "normalize", "in.csv", "out.csv"]).unwrap();
        assert_eq!(
            parsed.command,
            Command::Normalize {
                input_file: PathBuf::from("in.csv"),
                output_file: PathBuf::from("out.csv"),
            }
        );
    }

    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::missing_input(&["program", "inspect"])]
    #[case::missing_output(&["program", "normalize", "in.csv"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "inspect", "input.csv"])]
    #[case::unknown_command(&["program", "merge", "a.csv", "b.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
