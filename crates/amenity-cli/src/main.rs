//! Amenity QA CLI.

use clap::{ColorChoice, Parser};
use amenity_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{exit_code_for, run_compare, run_normalize, run_sample};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

/// Runs one command and returns the process exit status: 0 on success, 1 when
/// `--fail-on-issues` finds a disagreement, 2 on any error.
fn run(cli: &Cli) -> i32 {
    cli.color.write_global();
    let log_config = log_config_from_cli(cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error:#}");
        return 2;
    }
    let outcome = match &cli.command {
        Command::Compare(args) => {
            run_compare(args).map(|analysis| exit_code_for(&analysis, &args.report))
        }
        Command::Sample(args) => {
            run_sample(args).map(|analysis| exit_code_for(&analysis, &args.report))
        }
        Command::Normalize(args) => run_normalize(args).map(|()| 0),
    };
    outcome.unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        2
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
