//! Classify command implementation for podcrab
//!
//! This module implements the classify command which guesses the file type
//! of the enclosure a URL points at.

use crate::{config::Config, error::Result, media::file_type_from_url};

/// Classify command implementation
pub struct ClassifyCommand<'a> {
    args: &'a super::super::Classify,
}

impl<'a> ClassifyCommand<'a> {
    /// Create a new classify command
    pub fn new(args: &'a super::super::Classify) -> Self {
        Self { args }
    }

    /// Execute the classify command
    pub fn run(&self, _config: &Config) -> Result<()> {
        match file_type_from_url(&self.args.url) {
            Some(file_type) => println!("{file_type}"),
            None => println!("unknown"),
        }
        Ok(())
    }
}
