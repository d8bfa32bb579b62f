//! podcrab - utility toolkit for a podcast/media aggregator
//!
//! This crate collects the helper routines a podcast aggregator needs around
//! its feed and download handling, organized by functionality:
//! - Feed URL normalization and credential extraction
//! - Filesystem helpers for managing downloaded episodes
//! - Human-readable size formatting
//! - HTML stripping and entity decoding for episode descriptions
//! - Torrent descriptor sniffing
//! - File-type classification by extension
//! - Icon caching for tree view widgets
//! - Feed timestamp formatting
//! - `{object.attr}` template substitution
//!
//! The helpers are independent of each other; they share only the logging
//! facility and the configuration types.

pub mod cli;
pub mod config;
pub mod error;
pub mod feeds;
pub mod format;
pub mod fs;
pub mod icons;
pub mod media;
pub mod text;
pub mod time;
pub mod torrent;

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use feeds::{file_extension_from_url, normalize_feed_url, username_password_from_url};
pub use format::{SizeUnit, format_filesize};
pub use fs::{calculate_size, delete_file, directory_is_writable, make_directory};
pub use icons::{IconCache, IconSource};
pub use media::{FileType, file_type_by_extension, file_type_from_url};
pub use text::{TemplateVars, first_line, remove_html_tags, render_template};
pub use time::updated_to_rfc2822;
pub use torrent::torrent_filename;
