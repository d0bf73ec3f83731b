//! CLI argument definitions for the patient data cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pdc_standards::{DEFAULT_COUNTRY, DEFAULT_SCHEMA};

#[derive(Parser)]
#[command(
    name = "pdc",
    version,
    about = "Patient Data Cleaner - normalize patient uploads for import",
    long_about = "Normalize a spreadsheet or CSV upload of patient records against a schema.\n\n\
                  Writes <name>.csv (all schema fields plus upload_issues) and\n\
                  <name>_for_upload.csv (schema fields only, no header)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Allow patient values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML registry file replacing the built-in schemas and country profiles.
    #[arg(long = "standards", value_name = "FILE", global = true)]
    pub standards: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean an upload and write the output tables.
    Clean(CleanArgs),

    /// List the available schemas and their fields.
    Schemas,

    /// List the available country profiles.
    Countries,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Upload to clean (csv, xls, xlsx, xlsm or ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Schema to validate against.
    #[arg(long = "schema", default_value = DEFAULT_SCHEMA)]
    pub schema: String,

    /// Country profile used to infer dialing codes.
    #[arg(long = "country", default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Output base name (default: input file name without extension, plus "_clean").
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the batch report as JSON.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,
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
