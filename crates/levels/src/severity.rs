//! crates/levels/src/severity.rs
//! The closed set of log severities and their display tags.

use std::fmt;
use std::str::FromStr;

/// Severity attached to every log message.
///
/// Ranks are stable, contiguous and totally ordered: [`Severity::Debug`] is
/// rank 0 and [`Severity::Fatal`] is rank 5. The derived `Ord` follows rank
/// order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Developer diagnostics.
    Debug,
    /// Informational messages.
    Info,
    /// General log output.
    Log,
    /// Conditions that deserve attention.
    Warning,
    /// Recoverable errors.
    Error,
    /// Unrecoverable errors.
    Fatal,
}

impl Severity {
    /// Every severity in rank order.
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Log,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the stable integer rank (`Debug` = 0 … `Fatal` = 5).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the fixed display tag, e.g. `[DEBUG]`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO]",
            Self::Log => "[LOG]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
            Self::Fatal => "[FATAL]",
        }
    }

    /// Maps a raw rank back to a severity.
    ///
    /// This is the only gate through which integer ranks enter the system;
    /// anything outside `0..=5` is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::from_rank(4), Some(Severity::Error));
    /// assert_eq!(Severity::from_rank(6), None);
    /// ```
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Log),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Log => "log",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Parses a lowercase severity name as used on the command line.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "log" => Ok(Self::Log),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(format!("unknown severity: {token}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_contiguous_and_ordered() {
        for (expected, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.rank() as usize, expected);
        }
        assert!(Severity::Debug < Severity::Fatal);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn tags_match_rank_order() {
        let tags: Vec<_> = Severity::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(
            tags,
            ["[DEBUG]", "[INFO]", "[LOG]", "[WARNING]", "[ERROR]", "[FATAL]"]
        );
    }

    #[test]
    fn from_rank_round_trips_every_severity() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_rank(severity.rank()), Some(severity));
        }
    }

    #[test]
    fn from_rank_rejects_out_of_range() {
        assert_eq!(Severity::from_rank(6), None);
        assert_eq!(Severity::from_rank(255), None);
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn severity_serde_round_trip() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        let decoded: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Severity::Error);
    }
}
