//! CLI argument definitions for the EDA generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use eda_ingest::InputFormat;
use eda_output::OutputTargets;

/// Environment variable supplying the default output directory.
pub const OUTPUT_DIR_ENV: &str = "EDA_OUTPUT_DIR";

#[derive(Parser)]
#[command(
    name = "eda",
    version,
    about = "EDA dunning application generator",
    long_about = "Convert a claim record (CSV or JSON) into an EDA Mahnantrag.\n\n\
                  Produces a ZIP package with EGVP manifest and a fixed-block\n\
                  .eda container framed by AA/BB records."
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

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include party names and addresses in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a claim file into EDA artifacts.
    Convert(ConvertArgs),

    /// Validate a fixed-block .eda container and show its contents.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Claim input file (.csv or .json).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (default: $EDA_OUTPUT_DIR, else the current directory).
    #[arg(long = "output-dir", value_name = "DIR", env = OUTPUT_DIR_ENV)]
    pub output_dir: Option<PathBuf>,

    /// Base name of the artifacts (default: input file stem).
    #[arg(long = "base-name", value_name = "NAME", conflicts_with = "unique_name")]
    pub base_name: Option<String>,

    /// Name the artifacts after the generated document ID.
    #[arg(long = "unique-name")]
    pub unique_name: bool,

    /// Artifacts to produce.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Parent directory for the temporary packaging area.
    #[arg(long = "work-dir", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Input format (default: detected from the file extension).
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<InputFormatArg>,

    /// Procedure tag of the .eda header record (default: MAHNV.EDA).
    #[arg(long = "eda-procedure", value_name = "TAG")]
    pub eda_procedure: Option<String>,

    /// Version tag of the .eda header record (default: V04).
    #[arg(long = "eda-version", value_name = "TAG")]
    pub eda_version: Option<String>,

    /// Sequence tag of the .eda header record (default: 01).
    #[arg(long = "eda-sequence", value_name = "TAG")]
    pub eda_sequence: Option<String>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Fixed-block container to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the reassembled XML payload.
    #[arg(long = "payload")]
    pub payload: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Zip,
    Eda,
    Both,
}

impl From<OutputFormatArg> for OutputTargets {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Zip => OutputTargets::Zip,
            OutputFormatArg::Eda => OutputTargets::Eda,
            OutputFormatArg::Both => OutputTargets::Both,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Json,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Csv => InputFormat::Csv,
            InputFormatArg::Json => InputFormat::Json,
        }
    }
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
