//! crates/record/src/timestamp.rs
//! Wall-clock timestamps for log lines.

use std::fmt;

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Rendering format for the line timestamp.
const LINE_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:3]"
);

/// Wall-clock time captured when a record is formatted.
///
/// One value is taken per logging call; values are human-decodable and
/// non-decreasing across calls. UTC is used so lines sort the same way
/// regardless of the host timezone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Captures the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Renders the bracketed form used in log lines, e.g.
    /// `[2026-08-07 14:03:22.123]`.
    #[must_use]
    pub fn bracketed(&self) -> String {
        format!("[{self}]")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(LINE_TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bracketed_numeric_form() {
        let stamp = Timestamp::now().bracketed();
        assert!(stamp.starts_with('['));
        assert!(stamp.ends_with(']'));
        // [YYYY-MM-DD HH:MM:SS.mmm] is 25 characters including brackets.
        assert_eq!(stamp.len(), 25);
        assert!(stamp[1..5].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn successive_values_never_decrease() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(second >= first);
    }
}
