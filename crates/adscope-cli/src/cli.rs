//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Adscope CLI - Classify advertisement text into structured profiles.
#[derive(Debug, Parser)]
#[command(name = "adscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable tables (default)
    Table,
    /// Canonical JSON
    Json,
    /// Canonical CSV (header row plus one data row)
    Csv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one advertisement
    Classify(ClassifyArgs),
}

/// Arguments for the classify command.
///
/// Ad fields may be given individually or together as a JSON object via
/// `--file` / `--stdin`; individual flags override file values.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// JSON file containing the ad metadata object
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read the ad metadata object as JSON from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Ad index
    #[arg(long)]
    pub idx: Option<String>,

    /// Campaign code
    #[arg(long)]
    pub code: Option<String>,

    /// Ad name
    #[arg(long)]
    pub name: Option<String>,

    /// Ad summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Participation guide
    #[arg(long)]
    pub guide: Option<String>,

    /// Participation restrictions
    #[arg(long)]
    pub limit: Option<String>,

    /// Reward price
    #[arg(long)]
    pub reward_price: Option<String>,

    /// Minimum eligible age
    #[arg(long)]
    pub age_min: Option<String>,

    /// Maximum eligible age
    #[arg(long)]
    pub age_max: Option<String>,

    /// Campaign start date
    #[arg(long)]
    pub sdate: Option<String>,

    /// Campaign end date
    #[arg(long)]
    pub edate: Option<String>,

    /// User-specified ad type override
    #[arg(long)]
    pub ad_type: Option<String>,

    /// User-specified ad category override
    #[arg(long)]
    pub category: Option<String>,

    /// API key for the hosted model service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Write the formatted result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
