//! CLI argument definitions for the blood bank generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use bloodbank_ingest::PINCODE_DIRECTORY_FILE;
use bloodbank_model::DEFAULT_DONOR_PREFIX;
use bloodbank_synth::{DEFAULT_END_DATE, DEFAULT_NUM_DONORS, DEFAULT_START_DATE};

/// Environment variable overriding the default reference data directory.
pub const DATA_DIR_ENV_VAR: &str = "BLOODBANK_DATA_DIR";

pub const DEFAULT_DATA_DIR: &str = "../data/";

#[derive(Parser)]
#[command(
    name = "bloodbank",
    version,
    about = "Synthetic blood bank dataset generator",
    long_about = "Generate a synthetic blood bank dataset for analytics demos.\n\n\
                  Produces donors.csv, donations_log.csv and issuance_log.csv from\n\
                  a pincode directory and a holiday calendar."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Generate donors, donation log and issuance log.
    Generate(GenerateArgs),

    /// Show the blood type distribution used for sampling.
    BloodTypes,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory containing transfusion.csv and holidays.csv.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = DATA_DIR_ENV_VAR,
        default_value = DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,

    /// Pincode directory CSV with a `pincode` column.
    #[arg(
        long = "pincode-file",
        value_name = "PATH",
        default_value = PINCODE_DIRECTORY_FILE
    )]
    pub pincode_file: PathBuf,

    /// Output directory for generated files (default: <DATA_DIR>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of synthetic donors.
    #[arg(long = "num-donors", value_name = "N", default_value_t = DEFAULT_NUM_DONORS)]
    pub num_donors: usize,

    /// First day of the logs (inclusive, YYYY-MM-DD).
    #[arg(long = "start-date", value_name = "DATE", default_value_t = DEFAULT_START_DATE)]
    pub start_date: NaiveDate,

    /// Last day of the logs (inclusive, YYYY-MM-DD).
    #[arg(long = "end-date", value_name = "DATE", default_value_t = DEFAULT_END_DATE)]
    pub end_date: NaiveDate,

    /// Prefix for donor identifiers.
    #[arg(long = "donor-prefix", value_name = "PREFIX", default_value = DEFAULT_DONOR_PREFIX)]
    pub donor_prefix: String,

    /// Seed for reproducible output. A random seed is used (and logged) when omitted.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of donation log rows shown in the summary.
    #[arg(long = "sample-rows", value_name = "N", default_value_t = 5)]
    pub sample_rows: usize,
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
