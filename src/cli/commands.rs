//! CLI command implementations for podcrab
//!
//! This module contains the implementation of CLI commands including
//! normalize, size, classify and sniff functionality.

mod classify;
mod normalize;
mod size;
mod sniff;

pub use classify::ClassifyCommand;
pub use normalize::NormalizeCommand;
pub use size::SizeCommand;
pub use sniff::SniffCommand;

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a feed URL to a downloadable scheme
    Normalize(super::Normalize),

    /// Calculate the size of a file or directory tree
    Size(super::Size),

    /// Classify an enclosure URL as audio, video or torrent
    Classify(super::Classify),

    /// Extract the declared download name from a torrent file
    Sniff(super::Sniff),
}

impl Commands {
    /// Execute the command
    pub fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = cli.build_config();
        self.setup_log(&config);
        match self {
            Self::Normalize(normalize) => NormalizeCommand::new(normalize).run(&config)?,
            Self::Size(size) => SizeCommand::new(size).run(&config)?,
            Self::Classify(classify) => ClassifyCommand::new(classify).run(&config)?,
            Self::Sniff(sniff) => SniffCommand::new(sniff).run(&config)?,
        }
        Ok(())
    }

    /// Setup logging configuration
    fn setup_log(&self, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = if let Ok(podcrab_log) = env::var(LOG_LEVEL_ENV_VAR) {
            match podcrab_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => LevelFilter::Info,
            }
        } else {
            config.log_level
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
