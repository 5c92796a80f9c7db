use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chronos temporal-metadata checker for climate-model archives.
#[derive(Parser)]
#[command(
    name = "chronos",
    version,
    about = "Temporal-metadata checks for climate-model data files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the single-file time checks over metadata records.
    Check(CheckArgs),
    /// Check timeseries continuity across a set of metadata records.
    Series(SeriesArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// JSON metadata files describing the datasets to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Override the per-table match tolerance, e.g. 'days:16'.
    #[arg(short, long)]
    pub tolerance: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
pub struct SeriesArgs {
    /// JSON metadata files describing one timeseries.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
