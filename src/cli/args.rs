//! CLI argument parsing for podcrab
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::Config;
use crate::format::SizeUnit;
use clap::{Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Utility toolkit for a podcast/media aggregator
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments
    pub fn build_config(&self) -> Config {
        Config::new().with_log_level(self.log_level)
    }
}

/// Normalize command arguments
#[derive(Args)]
pub struct Normalize {
    /// The feed URL to normalize
    pub url: String,
}

/// Size command arguments
#[derive(Args)]
pub struct Size {
    /// The file or directory to measure
    pub path: PathBuf,

    /// Force a specific unit (B, KB, MB, GB) instead of picking the largest fitting one
    #[arg(short, long)]
    pub unit: Option<SizeUnit>,
}

/// Classify command arguments
#[derive(Args)]
pub struct Classify {
    /// The enclosure URL to classify
    pub url: String,
}

/// Sniff command arguments
#[derive(Args)]
pub struct Sniff {
    /// The candidate torrent file to inspect
    pub path: PathBuf,
}
