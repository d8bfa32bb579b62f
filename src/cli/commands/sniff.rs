//! Sniff command implementation for podcrab
//!
//! This module implements the sniff command which checks whether a file is a
//! single-file torrent descriptor and prints its declared download name.

use crate::{
    config::Config,
    error::{Error, Result},
    torrent::torrent_filename,
};
use log::debug;

/// Sniff command implementation
pub struct SniffCommand<'a> {
    args: &'a super::super::Sniff,
}

impl<'a> SniffCommand<'a> {
    /// Create a new sniff command
    pub fn new(args: &'a super::super::Sniff) -> Self {
        Self { args }
    }

    /// Execute the sniff command
    pub fn run(&self, _config: &Config) -> Result<()> {
        debug!("Sniffing '{}'", self.args.path.display());
        match torrent_filename(&self.args.path) {
            Some(name) => {
                println!("{name}");
                Ok(())
            }
            None => Err(Error::TorrentNotRecognized {
                path: self.args.path.display().to_string(),
            }),
        }
    }
}
