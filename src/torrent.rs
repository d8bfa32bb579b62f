//! Torrent sniffing utilities for podcrab
//!
//! This module provides a crude check for whether a downloaded enclosure is
//! really a single-file BitTorrent descriptor, by locating the bencode
//! markers in its head and extracting the declared download file name.

use crate::config::{TORRENT_NAME_MARKER, TORRENT_PIECES_MARKER, TORRENT_SNIFF_WINDOW};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Checks whether a file is a single-file torrent descriptor
///
/// The head of the file is scanned for the `6:pieces` marker and the declared
/// file name is extracted from the `4:name` entry.
///
/// # Arguments
/// * `path` - The candidate file to inspect
///
/// # Returns
/// Returns the name of the file the torrent would download, or None on any
/// parse failure (the file is not a torrent)
pub fn torrent_filename(path: &Path) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            debug!("Cannot open '{}': {error}", path.display());
            return None;
        }
    };

    let mut header = Vec::with_capacity(TORRENT_SNIFF_WINDOW);
    file.take(TORRENT_SNIFF_WINDOW as u64)
        .read_to_end(&mut header)
        .ok()?;

    // A torrent descriptor always carries the piece hashes
    find_marker(&header, TORRENT_PIECES_MARKER)?;

    let length_start = find_marker(&header, TORRENT_NAME_MARKER)? + TORRENT_NAME_MARKER.len();
    let colon = header[length_start..]
        .iter()
        .position(|&byte| byte == b':')?
        + length_start;

    let name_length: usize = std::str::from_utf8(&header[length_start..colon])
        .ok()?
        .parse()
        .ok()?;

    let name_bytes = header.get(colon + 1..colon + 1 + name_length)?;
    String::from_utf8(name_bytes.to_vec()).ok()
}

/// Finds the position of a byte marker in a buffer
fn find_marker(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_torrent_filename_single_file() {
        let file = write_fixture(
            b"d4:infod6:lengthi100e4:name9:file1.mp36:pieces20:aaaaaaaaaaaaaaaaaaaaee",
        );
        assert_eq!(
            torrent_filename(file.path()),
            Some("file1.mp3".to_string())
        );
    }

    #[test]
    fn test_torrent_filename_not_a_torrent() {
        let file = write_fixture(b"<?xml version=\"1.0\"?><rss></rss>");
        assert_eq!(torrent_filename(file.path()), None);
    }

    #[test]
    fn test_torrent_filename_missing_pieces() {
        let file = write_fixture(b"d4:infod4:name9:file1.mp3ee");
        assert_eq!(torrent_filename(file.path()), None);
    }

    #[test]
    fn test_torrent_filename_truncated_name() {
        let file = write_fixture(b"d4:name99:short6:pieces20:aaaaaaaaaaaaaaaaaaaae");
        assert_eq!(torrent_filename(file.path()), None);
    }

    #[test]
    fn test_torrent_filename_bad_length_digits() {
        let file = write_fixture(b"d4:namex:oops6:pieces20:aaaaaaaaaaaaaaaaaaaae");
        assert_eq!(torrent_filename(file.path()), None);
    }

    #[test]
    fn test_torrent_filename_missing_file() {
        assert_eq!(torrent_filename(Path::new("/nonexistent.torrent")), None);
    }
}
