//! `resect` command-line viewer.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use resect_cli::commands::{run_codes, run_show, run_summary};
use resect_cli::logging::{LogConfig, LogFormat, init_logging};
use resect_cli::render::{OutputFormat, Styling};
use resect_ingest::IngestOptions;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, InputArgs, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let styling = table_styling(cli.color.color);
    let outcome = match &cli.command {
        Command::Show(args) => run_show(
            &args.input.file,
            &ingest_options(&args.input),
            args.case,
            output_format(args.format),
            styling,
        ),
        Command::Summary(args) => run_summary(
            &args.input.file,
            &ingest_options(&args.input),
            output_format(args.format),
            styling,
        ),
        Command::Codes => Ok(run_codes(styling)),
    };
    let exit_code = match outcome {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn ingest_options(input: &InputArgs) -> IngestOptions {
    IngestOptions::default()
        .with_delimiter(input.delimiter)
        .with_dynamic_typing(!input.no_dynamic_typing)
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}

/// `--color` applies to tables on stdout as well as to logs.
fn table_styling(color: ColorChoice) -> Styling {
    match color {
        ColorChoice::Always => Styling::Always,
        ColorChoice::Never => Styling::Never,
        ColorChoice::Auto => Styling::Auto,
    }
}

/// Explicit `--log-level` beats `-v/-q`, which beat `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
        .with_log_data(cli.log_data)
}
