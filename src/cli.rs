//! CLI module for podcrab
//!
//! This module contains the command-line interface of the toolkit: argument
//! definitions and the command implementations wrapping the library calls.

mod args;
mod commands;

pub use args::{Classify, Cli, Normalize, Size, Sniff};
pub use commands::Commands;

use crate::error::Result;
use clap::Parser;

/// Parses the command line and runs the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli)
}
