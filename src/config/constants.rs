//! Configuration constants for podcrab
//!
//! This module contains all hardcoded constants used throughout the toolkit,
//! organized by functionality and following Rust naming conventions.

// =============================================================================
// Feed URL Constants
// =============================================================================

/// URL schemes that are accepted as-is by feed URL normalization
pub const ACCEPTED_URL_SCHEMES: &[&str] = &["http://", "ftp://"];

/// URL scheme that gets rewritten to HTTP during normalization
pub const FEED_URL_SCHEME: &str = "feed://";

/// Minimum length of a feed URL worth normalizing ("http://x" is 8 bytes)
pub const MIN_FEED_URL_LENGTH: usize = 8;

// =============================================================================
// Media File Support Constants
// =============================================================================

/// Supported audio file extensions
pub const SUPPORTED_AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "wma", "aac", "m4a"];

/// Supported video file extensions
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] =
    &["mp4", "avi", "mpg", "mpeg", "m4v", "mov", "divx"];

/// Supported torrent file extensions
pub const SUPPORTED_TORRENT_EXTENSIONS: &[&str] = &["torrent"];

// =============================================================================
// Size Formatting Constants
// =============================================================================

/// Placeholder reported for sizes that cannot be determined
pub const UNKNOWN_SIZE_MSG: &str = "(unknown)";

// =============================================================================
// Filesystem Constants
// =============================================================================

/// Suffix of the extracted cover art file deleted alongside an episode
pub const COVER_FILE_SUFFIX: &str = ".cover.jpg";

// =============================================================================
// Torrent Sniffing Constants
// =============================================================================

/// Bencode marker that must be present for a file to count as a torrent
pub const TORRENT_PIECES_MARKER: &[u8] = b"6:pieces";

/// Bencode key preceding the declared download file name
pub const TORRENT_NAME_MARKER: &[u8] = b"4:name";

/// Number of bytes read from the head of a candidate torrent file
pub const TORRENT_SNIFF_WINDOW: usize = 4096;

// =============================================================================
// Icon Constants
// =============================================================================

/// Icon size used for tree view rows
pub const DEFAULT_ICON_SIZE: u32 = 16;

/// Size of the status emblem composited onto tree view icons
pub const DEFAULT_EMBLEM_SIZE: u32 = 10;

/// Icon name used when the requested icon cannot be loaded
pub const FALLBACK_ICON_NAME: &str = "dialog-question";

/// Icon name of the status bullet emblem
pub const BULLET_ICON_NAME: &str = "emblem-default";

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "PODCRAB_LOG";
