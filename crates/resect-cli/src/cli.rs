//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "resect",
    version,
    about = "Pancreatic cancer resectability staging from structured radiology findings",
    long_about = "Read a table of structured radiology findings, normalize each case and \
                  classify vascular involvement, distant spread and overall resectability."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow clinical free text (evidence, narratives, raw cells) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one case with its findings and verdict.
    Show(ShowArgs),

    /// List the verdict of every case.
    Summary(SummaryArgs),

    /// List status codes and their display labels.
    Codes,
}

#[derive(Args)]
pub struct InputArgs {
    /// Delimited findings table with a header row.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter (a single ASCII character, or `tab`).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Keep every cell as text instead of detecting numbers and booleans.
    #[arg(long = "no-dynamic-typing")]
    pub no_dynamic_typing: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Case to show, counting from 1 in file order.
    #[arg(long = "case", value_name = "N", default_value_t = 1)]
    pub case: usize,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!(
                "expected a single ASCII character or `tab`, got {value:?}"
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn delimiter_values() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter("::").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn show_defaults_to_first_case_as_table() {
        let cli = Cli::try_parse_from(["resect", "show", "cases.csv"]).expect("parse");
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.case, 1);
        assert!(matches!(args.format, OutputFormatArg::Table));
        assert_eq!(args.input.delimiter, b',');
        assert!(!args.input.no_dynamic_typing);
        assert!(!cli.log_data);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "resect",
            "summary",
            "cases.tsv",
            "--delimiter",
            "tab",
            "--format",
            "json",
            "--log-format",
            "json",
            "--log-data",
        ])
        .expect("parse");
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.input.delimiter, b'\t');
        assert!(matches!(args.format, OutputFormatArg::Json));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.log_data);
    }
}
