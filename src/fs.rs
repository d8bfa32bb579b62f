//! Filesystem utilities for podcrab
//!
//! This module provides blocking filesystem helpers used when managing
//! downloaded episodes: directory creation, writability probing, recursive
//! size calculation and episode deletion.

use crate::config::Config;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Tries to create a directory if it does not exist already
///
/// # Arguments
/// * `path` - The directory to create
///
/// # Returns
/// Returns true if the directory exists after the call, false otherwise
pub fn make_directory(path: &Path) -> bool {
    if path.is_dir() {
        return true;
    }

    match fs::create_dir_all(path) {
        Ok(()) => true,
        Err(error) => {
            warn!("Could not create directory '{}': {error}", path.display());
            false
        }
    }
}

/// Checks whether a directory exists and is writable by the current user
///
/// Writability is probed by creating an unnamed temporary file inside the
/// directory, so the answer reflects what the filesystem actually permits.
///
/// # Arguments
/// * `path` - The directory to probe
///
/// # Returns
/// Returns true if the path is an existing, writable directory
pub fn directory_is_writable(path: &Path) -> bool {
    path.is_dir() && tempfile::tempfile_in(path).is_ok()
}

/// Calculates the size of a file or directory tree in bytes
///
/// Symlinks to files count the target's size; symlinked directories are not
/// recursed into. Entries that cannot be inspected (permissions, races) are
/// skipped, so the result may undercount. A path directly below the
/// filesystem root short-circuits to 0.
///
/// # Arguments
/// * `path` - The file or directory to measure
///
/// # Returns
/// Returns the total size in bytes, or 0 if the path cannot be inspected
pub fn calculate_size(path: &Path) -> u64 {
    if path.parent() == Some(Path::new("/")) {
        return 0;
    }

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return 0,
    };

    if metadata.is_file() {
        return metadata.len();
    }

    if metadata.is_dir() {
        let is_symlink = fs::symlink_metadata(path)
            .map(|link_metadata| link_metadata.is_symlink())
            .unwrap_or(true);
        if is_symlink {
            return 0;
        }

        let mut total = metadata.len();
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                total += calculate_size(&entry.path());
            }
        }
        return total;
    }

    // Special files do not count
    0
}

/// Deletes an episode file, silently ignoring deletion errors
///
/// Also deletes the extracted cover art sidecar (`<path><cover_suffix>`)
/// if one exists next to the episode.
///
/// # Arguments
/// * `path` - The episode file to delete
/// * `config` - Configuration providing the cover sidecar suffix
pub fn delete_file(path: &Path, config: &Config) {
    debug!("Trying to delete: {}", path.display());

    if let Err(error) = fs::remove_file(path) {
        debug!("Could not delete '{}': {error}", path.display());
        return;
    }

    let cover_path = cover_sidecar_path(path, &config.cover_suffix);
    if cover_path.is_file() {
        if let Err(error) = fs::remove_file(&cover_path) {
            debug!("Could not delete cover '{}': {error}", cover_path.display());
        }
    }
}

/// Builds the path of the cover art sidecar for an episode file
fn cover_sidecar_path(path: &Path, cover_suffix: &str) -> PathBuf {
    let mut cover = path.as_os_str().to_os_string();
    cover.push(cover_suffix);
    PathBuf::from(cover)
}
