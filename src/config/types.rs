//! Configuration types for podcrab
//!
//! This module contains configuration structures and related types
//! used throughout the toolkit.

use log::LevelFilter;

use super::constants::*;

/// Configuration for the toolkit
#[derive(Debug, Clone)]
pub struct Config {
    /// Icon size used for tree view rows
    pub icon_size: u32,
    /// Size of the status emblem composited onto icons
    pub emblem_size: u32,
    /// Suffix of the cover art sidecar file removed with an episode
    pub cover_suffix: String,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            emblem_size: DEFAULT_EMBLEM_SIZE,
            cover_suffix: COVER_FILE_SUFFIX.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon size
    pub fn with_icon_size(mut self, size: u32) -> Self {
        self.icon_size = size;
        self
    }

    /// Sets the emblem size
    pub fn with_emblem_size(mut self, size: u32) -> Self {
        self.emblem_size = size;
        self
    }

    /// Sets the cover art sidecar suffix
    pub fn with_cover_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.cover_suffix = suffix.into();
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.icon_size, DEFAULT_ICON_SIZE);
        assert_eq!(config.emblem_size, DEFAULT_EMBLEM_SIZE);
        assert_eq!(config.cover_suffix, COVER_FILE_SUFFIX);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_icon_size(24)
            .with_emblem_size(12)
            .with_cover_suffix(".folder.jpg")
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.icon_size, 24);
        assert_eq!(config.emblem_size, 12);
        assert_eq!(config.cover_suffix, ".folder.jpg");
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_ICON_SIZE, 16);
        assert_eq!(DEFAULT_EMBLEM_SIZE, 10);
        assert_eq!(LOG_LEVEL_ENV_VAR, "PODCRAB_LOG");
    }
}
