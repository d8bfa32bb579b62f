//! Size command implementation for podcrab
//!
//! This module implements the size command which measures a file or
//! directory tree and prints a human-readable size.

use crate::{
    config::Config,
    error::{Error, Result},
    format::format_filesize,
    fs::calculate_size,
};
use log::debug;

/// Size command implementation
pub struct SizeCommand<'a> {
    args: &'a super::super::Size,
}

impl<'a> SizeCommand<'a> {
    /// Create a new size command
    pub fn new(args: &'a super::super::Size) -> Self {
        Self { args }
    }

    /// Execute the size command
    pub fn run(&self, _config: &Config) -> Result<()> {
        if !self.args.path.exists() {
            return Err(Error::PathNotFound {
                path: self.args.path.display().to_string(),
                context: "cannot measure a missing path".to_string(),
            });
        }

        let bytes = calculate_size(&self.args.path);
        debug!("'{}' is {bytes} bytes", self.args.path.display());
        println!("{}", format_filesize(bytes as i64, self.args.unit));
        Ok(())
    }
}
