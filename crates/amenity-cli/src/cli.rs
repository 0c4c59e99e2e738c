//! CLI argument definitions for the amenity QA tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use amenity_cli::input::DEFAULT_MAX_BYTES;

#[derive(Parser)]
#[command(
    name = "amenity-qa",
    version,
    about = "Amenity QA - reconcile PMG amenity exports with Amber listings",
    long_about = "Compare two amenity catalogs, one label per line.\n\n\
                  Reports amenities missing from Amber, unexpected Amber entries,\n\
                  duplicates within each catalog, and likely spelling variants."
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

#[derive(Subcommand)]
pub enum Command {
    /// Compare a PMG export with an Amber listing.
    Compare(CompareArgs),

    /// Run the analysis over the built-in sample catalogs.
    Sample(SampleArgs),

    /// Print the normalized comparison key for each label.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// PMG amenity export, one label per line ("-" for stdin).
    #[arg(value_name = "PMG_FILE")]
    pub pmg: PathBuf,

    /// Amber amenity listing, one label per line ("-" for stdin).
    #[arg(value_name = "AMBER_FILE")]
    pub amber: PathBuf,

    /// Reject inputs larger than this many bytes.
    #[arg(long = "max-bytes", value_name = "N", default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: u64,

    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser)]
pub struct SampleArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Labels to normalize (reads stdin lines when omitted).
    #[arg(value_name = "LABEL")]
    pub labels: Vec<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

/// Matching policy overrides shared by every command.
#[derive(Args)]
pub struct PolicyArgs {
    /// JSON policy file; flags below override its values.
    #[arg(long = "policy", value_name = "PATH")]
    pub policy_file: Option<PathBuf>,

    /// Minimum similarity (0 to 1) for suggestions and typo candidates.
    #[arg(long = "threshold", value_name = "F")]
    pub threshold: Option<f64>,

    /// Connector word to ignore when comparing labels. Repeat to list
    /// several; replaces the default set ("the", "and").
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopwords: Vec<String>,

    /// Treat a trailing "s" as insignificant ("Services" matches "Service").
    #[arg(long = "fold-plurals")]
    pub fold_plurals: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Exit with status 1 when the catalogs disagree.
    #[arg(long = "fail-on-issues")]
    pub fail_on_issues: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
