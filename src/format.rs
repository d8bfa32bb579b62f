//! Size formatting utilities for podcrab
//!
//! This module provides functions for formatting byte counts into
//! human-readable strings for display in episode lists.

use crate::config::UNKNOWN_SIZE_MSG;

/// Units understood by the size formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    /// Bytes
    B,
    /// Kibibytes (1024 bytes)
    Kb,
    /// Mebibytes (1024 KB)
    Mb,
    /// Gibibytes (1024 MB)
    Gb,
}

impl SizeUnit {
    /// Returns the number of bytes one step of this unit represents
    pub fn factor(&self) -> f64 {
        match self {
            SizeUnit::B => 1.0,
            SizeUnit::Kb => 1024.0,
            SizeUnit::Mb => 1024.0 * 1024.0,
            SizeUnit::Gb => 1024.0 * 1024.0 * 1024.0,
        }
    }

    /// Returns the display label for the unit
    pub fn label(&self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::Kb => "KB",
            SizeUnit::Mb => "MB",
            SizeUnit::Gb => "GB",
        }
    }

    /// Returns all units from smallest to largest
    pub fn all() -> Vec<SizeUnit> {
        vec![SizeUnit::B, SizeUnit::Kb, SizeUnit::Mb, SizeUnit::Gb]
    }
}

impl std::fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeUnit::all()
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown size unit '{s}'"))
    }
}

/// Formats a byte count to be human-readable
///
/// Either the most appropriate unit is picked (B, KB, MB, GB) or the byte
/// count is scaled to an explicitly requested unit.
///
/// # Arguments
/// * `bytes` - The size in bytes
/// * `unit` - Optional unit to force, instead of picking the largest fitting one
///
/// # Returns
/// Returns the formatted size, or the `(unknown)` placeholder for negative
/// values
pub fn format_filesize(bytes: i64, unit: Option<SizeUnit>) -> String {
    if bytes < 0 {
        return UNKNOWN_SIZE_MSG.to_string();
    }

    let bytes = bytes as f64;
    let unit = unit.unwrap_or_else(|| {
        let mut chosen = SizeUnit::B;
        for candidate in [SizeUnit::Kb, SizeUnit::Mb, SizeUnit::Gb] {
            if bytes >= candidate.factor() {
                chosen = candidate;
            }
        }
        chosen
    });

    format!("{:.2} {}", bytes / unit.factor(), unit.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_filesize_auto_unit() {
        assert_eq!(format_filesize(0, None), "0.00 B");
        assert_eq!(format_filesize(500, None), "500.00 B");
        assert_eq!(format_filesize(2048, None), "2.00 KB");
        assert_eq!(format_filesize(5 * 1024 * 1024, None), "5.00 MB");
        assert_eq!(format_filesize(3 * 1024 * 1024 * 1024, None), "3.00 GB");
    }

    #[test]
    fn test_format_filesize_explicit_unit() {
        assert_eq!(
            format_filesize(1024 * 1024, Some(SizeUnit::Kb)),
            "1024.00 KB"
        );
        assert_eq!(format_filesize(512, Some(SizeUnit::B)), "512.00 B");
    }

    #[test]
    fn test_format_filesize_negative() {
        assert_eq!(format_filesize(-1, None), UNKNOWN_SIZE_MSG);
        assert_eq!(format_filesize(-1024, Some(SizeUnit::Kb)), UNKNOWN_SIZE_MSG);
    }

    #[test]
    fn test_size_unit_factors() {
        assert_eq!(SizeUnit::B.factor(), 1.0);
        assert_eq!(SizeUnit::Kb.factor(), 1024.0);
        assert_eq!(SizeUnit::Gb.factor(), 1024.0 * 1024.0 * 1024.0);
    }

    #[test]
    fn test_size_unit_from_str() {
        assert_eq!("kb".parse::<SizeUnit>().unwrap(), SizeUnit::Kb);
        assert_eq!("GB".parse::<SizeUnit>().unwrap(), SizeUnit::Gb);
        assert!("XB".parse::<SizeUnit>().is_err());
    }
}
