//! Normalize command implementation for podcrab
//!
//! This module implements the normalize command which rewrites a feed URL
//! to a scheme the downloader understands.

use crate::{
    config::Config,
    error::{Error, Result},
    feeds::normalize_feed_url,
};
use log::debug;

/// Normalize command implementation
pub struct NormalizeCommand<'a> {
    args: &'a super::super::Normalize,
}

impl<'a> NormalizeCommand<'a> {
    /// Create a new normalize command
    pub fn new(args: &'a super::super::Normalize) -> Self {
        Self { args }
    }

    /// Execute the normalize command
    pub fn run(&self, _config: &Config) -> Result<()> {
        debug!("Normalizing feed URL '{}'", self.args.url);
        match normalize_feed_url(&self.args.url) {
            Some(normalized) => {
                println!("{normalized}");
                Ok(())
            }
            None => Err(Error::InvalidFeedUrl {
                url: self.args.url.clone(),
                reason: "unknown scheme or URL too short".to_string(),
            }),
        }
    }
}
