//! CLI argument definitions for the QTI converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use qti_cli::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(
    name = "csv2qti",
    version,
    about = "Convert quiz questions from CSV into a QTI v2.1 package",
    long_about = "Convert quiz questions from CSV into a QTI v2.1 package.\n\n\
                  Writes one single-choice assessment item per valid row under\n\
                  Items/Item_<id>/<id>.xml and an imsmanifest.xml listing them.\n\
                  Recognized columns: Item ID, Title, Question, Correct Choice, Choice*."
)]
pub struct Cli {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory receiving the package.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Embed text without XML escaping, byte-compatible with older packages.
    ///
    /// Input containing `<` or `&` then produces invalid XML.
    #[arg(long = "raw-text")]
    pub raw_text: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::try_parse_from(["csv2qti"]).expect("parse");
        assert_eq!(cli.input, PathBuf::from("quiz_questions.csv"));
        assert_eq!(cli.output_dir, PathBuf::from("output_qti"));
        assert!(!cli.raw_text);
        assert!(!cli.dry_run);
    }

    #[test]
    fn explicit_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "csv2qti",
            "bank.csv",
            "--output-dir",
            "pkg",
            "--raw-text",
            "--report",
            "run.json",
        ])
        .expect("parse");
        assert_eq!(cli.input, PathBuf::from("bank.csv"));
        assert_eq!(cli.output_dir, PathBuf::from("pkg"));
        assert!(cli.raw_text);
        assert_eq!(cli.report, Some(PathBuf::from("run.json")));
    }
}
