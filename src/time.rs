//! Date formatting utilities for podcrab
//!
//! This module converts parsed feed timestamps to RFC 2822 strings for
//! storage and display. Formatting is locale-independent, so no process-wide
//! locale state is touched.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Format used for feed timestamps (RFC 2822 with a GMT zone designator)
const RFC2822_GMT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Converts a parsed feed timestamp to an RFC 2822 string
///
/// The timestamp components are interpreted as GMT, matching the parsed
/// `updated` field of a feed entry. A leap second (`second == 60`) is
/// accepted and formatted as such.
///
/// # Arguments
/// * `year`, `month`, `day` - The date components
/// * `hour`, `minute`, `second` - The time-of-day components
///
/// # Returns
/// Returns the formatted timestamp, or an error naming the out-of-range
/// component
pub fn updated_to_rfc2822(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<String> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            Error::DateOutOfRange {
                field: "year",
                value: year as i64,
            }
        } else if !(1..=12).contains(&month) {
            Error::DateOutOfRange {
                field: "month",
                value: month as i64,
            }
        } else {
            Error::DateOutOfRange {
                field: "day",
                value: day as i64,
            }
        }
    })?;

    // A leap second is carried through chrono's nanosecond representation
    let timestamp = if second == 60 {
        date.and_hms_nano_opt(hour, minute, 59, 1_500_000_000)
    } else {
        date.and_hms_opt(hour, minute, second)
    }
    .ok_or_else(|| {
        if hour > 23 {
            Error::DateOutOfRange {
                field: "hour",
                value: hour as i64,
            }
        } else if minute > 59 {
            Error::DateOutOfRange {
                field: "minute",
                value: minute as i64,
            }
        } else {
            Error::DateOutOfRange {
                field: "second",
                value: second as i64,
            }
        }
    })?;

    Ok(timestamp.format(RFC2822_GMT_FORMAT).to_string())
}
