//! CLI argument definitions for the essay result analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use redacao_model::{
    DEFAULT_ADMIN_TYPE_COLUMN, DEFAULT_MUNICIPALITY_COLUMN, DEFAULT_STATUS_COLUMN, Dimension,
};

#[derive(Parser)]
#[command(
    name = "redacao",
    version,
    about = "Analyze ENEM 2024 essay results: filter, aggregate, summarize",
    long_about = "Filter an ENEM essay results CSV by municipality, essay status,\n\
                  and school administration type, then view frequency tables,\n\
                  two-dimensional grids, and summary statistics over the subset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Row count plus most/least frequent category per dimension.
    Summary(SummaryArgs),

    /// One-dimensional frequency table over the filtered rows.
    Freq(FreqArgs),

    /// Complete two-dimensional frequency grid over the filtered rows.
    Grid(GridArgs),

    /// Write the filtered rows back out as CSV.
    Export(ExportArgs),

    /// List the essay status and administration-type code registries.
    Codes,
}

/// Dataset location, schema overrides, and filter flags shared by
/// every data subcommand.
#[derive(Parser)]
pub struct DatasetArgs {
    /// Path to the essay results CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Field delimiter (auto-detected from the header when omitted).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Column holding the municipality name.
    #[arg(long = "municipality-column", value_name = "NAME", default_value = DEFAULT_MUNICIPALITY_COLUMN)]
    pub municipality_column: String,

    /// Column holding the essay status code.
    #[arg(long = "status-column", value_name = "NAME", default_value = DEFAULT_STATUS_COLUMN)]
    pub status_column: String,

    /// Column holding the school administration type code.
    #[arg(long = "admin-type-column", value_name = "NAME", default_value = DEFAULT_ADMIN_TYPE_COLUMN)]
    pub admin_type_column: String,

    /// Keep only these municipalities (repeatable; default: all observed).
    #[arg(long = "municipality", value_name = "NAME")]
    pub municipalities: Vec<String>,

    /// Keep only these essay status codes (repeatable; default: all observed).
    #[arg(long = "status", value_name = "CODE")]
    pub statuses: Vec<i64>,

    /// Keep only these administration type codes (repeatable; default: all observed).
    #[arg(long = "admin-type", value_name = "CODE")]
    pub admin_types: Vec<i64>,
}

#[derive(Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Emit JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FreqArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Dimension to count by.
    #[arg(value_enum, value_name = "DIMENSION")]
    pub dimension: DimensionArg,

    /// Emit JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GridArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Dimension for grid rows.
    #[arg(value_enum, value_name = "DIM_A")]
    pub dim_a: DimensionArg,

    /// Dimension for grid columns.
    #[arg(value_enum, value_name = "DIM_B")]
    pub dim_b: DimensionArg,

    /// Emit JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Destination path for the filtered CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

/// CLI dimension choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    Municipality,
    Status,
    AdminType,
}

impl DimensionArg {
    pub fn to_dimension(self) -> Dimension {
        match self {
            DimensionArg::Municipality => Dimension::Municipality,
            DimensionArg::Status => Dimension::Status,
            DimensionArg::AdminType => Dimension::AdminType,
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
