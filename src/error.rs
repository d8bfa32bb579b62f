use std::fmt;

/// Errors that can happen inside podcrab
#[derive(Debug)]
pub enum Error {
    // Feed URL errors
    /// The URL could not be normalized to a downloadable scheme
    InvalidFeedUrl {
        /// The URL that failed normalization
        url: String,
        /// Additional context about why normalization failed
        reason: String,
    },

    // Filesystem errors
    /// The requested path does not exist or is not accessible
    PathNotFound {
        /// The missing path
        path: String,
        /// Additional context about the access attempt
        context: String,
    },

    // Torrent sniffing errors
    /// The file does not look like a single-file torrent descriptor
    TorrentNotRecognized {
        /// Path to the candidate file
        path: String,
    },

    // Date conversion errors
    /// A parsed date component is outside its valid range
    DateOutOfRange {
        /// The name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    // Icon loading errors
    /// The themed-icon backend could not produce the requested icon
    IconLoadFailed {
        /// The icon name that was looked up
        name: String,
        /// Additional context from the backend
        context: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFeedUrl { url, reason } => {
                write!(f, "Cannot normalize feed URL '{url}': {reason}")
            }
            Error::PathNotFound { path, context } => {
                write!(f, "Path '{path}' not found: {context}")
            }
            Error::TorrentNotRecognized { path } => {
                write!(f, "'{path}' is not a single-file torrent descriptor")
            }
            Error::DateOutOfRange { field, value } => {
                write!(f, "Date field '{field}' out of range: {value}")
            }
            Error::IconLoadFailed { name, context } => {
                write!(f, "Failed to load icon '{name}': {context}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
