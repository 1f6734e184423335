//! Argument definitions for `aml`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aml",
    version,
    about = "Inspect and check application parameter files",
    long_about = "Inspect and check application parameter files.\n\n\
                  Loads an application XML file, applies NAME=VALUE assignments the way\n\
                  a program's command line would, verifies every parameter and prints\n\
                  the resulting command line."
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

    /// Log output format.
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
    /// Show an application's metadata and parameters.
    Describe(DescribeArgs),

    /// Apply assignments, verify all parameters and print the command line.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Application XML file.
    #[arg(value_name = "XML")]
    pub xml: PathBuf,

    /// Also report links that do not name exactly one parameter.
    #[arg(long = "check")]
    pub check: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Application XML file.
    #[arg(value_name = "XML")]
    pub xml: PathBuf,

    /// Parameter assignments, e.g. FROM=in.cub or BANDS=(1,3).
    #[arg(value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,

    /// User preference file (TOML). Defaults to $AML_PREFERENCES.
    #[arg(long = "preferences", value_name = "PATH")]
    pub preferences: Option<PathBuf>,

    /// How to print the resulting command line.
    #[arg(long = "format", value_enum, default_value = "pvl")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Pvl,
    Json,
    Invocation,
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
