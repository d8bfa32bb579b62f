//! Media file classification for podcrab
//!
//! This module provides the coarse file-type classification used to pick
//! players and tree view icons for downloaded episodes.

use crate::config::{
    SUPPORTED_AUDIO_EXTENSIONS, SUPPORTED_TORRENT_EXTENSIONS, SUPPORTED_VIDEO_EXTENSIONS,
};
use crate::feeds::file_extension_from_url;

/// Coarse file types recognized by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Audio episode (playable in a music player)
    Audio,
    /// Video episode (playable in a video player)
    Video,
    /// BitTorrent descriptor (handed to a torrent client)
    Torrent,
}

impl FileType {
    /// Returns the file extensions classified as this type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileType::Audio => SUPPORTED_AUDIO_EXTENSIONS,
            FileType::Video => SUPPORTED_VIDEO_EXTENSIONS,
            FileType::Torrent => SUPPORTED_TORRENT_EXTENSIONS,
        }
    }

    /// Returns all recognized file types
    pub fn all() -> Vec<FileType> {
        vec![FileType::Audio, FileType::Video, FileType::Torrent]
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FileType::Audio => write!(f, "audio"),
            FileType::Video => write!(f, "video"),
            FileType::Torrent => write!(f, "torrent"),
        }
    }
}

/// Guesses the file type from a filename extension
///
/// The lookup is case-insensitive and tolerates a leading dot.
///
/// # Arguments
/// * `extension` - The extension to look up, with or without the dot
///
/// # Returns
/// Returns the file type, or None if the extension is unknown or empty
pub fn file_type_by_extension(extension: &str) -> Option<FileType> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    if extension.is_empty() {
        return None;
    }

    let extension = extension.to_lowercase();
    FileType::all()
        .into_iter()
        .find(|file_type| file_type.extensions().contains(&extension.as_str()))
}

/// Guesses the file type of the enclosure a URL points at
///
/// # Arguments
/// * `url` - The enclosure URL
///
/// # Returns
/// Returns the file type, or None if the URL has no recognizable extension
pub fn file_type_from_url(url: &str) -> Option<FileType> {
    file_type_by_extension(&file_extension_from_url(url)?)
}
