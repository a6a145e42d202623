//! crates/record/src/origin.rs
//! Call-site resolution with an interactive-session fallback.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Origin of a logging call.
///
/// Either the source location of the code that invoked the severity method,
/// or the interactive-session sentinel when no call frame is available
/// (for example when a frontend logs on behalf of a command line). The
/// origin is recomputed for every call and never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Origin {
    /// A resolved source location.
    Source {
        /// Repo-relative path of the file containing the call.
        file: Cow<'static, str>,
        /// 1-based line number of the call.
        line: u32,
    },
    /// No enclosing call frame could be resolved.
    Interactive,
}

impl Origin {
    /// Human-readable label substituted when resolution fails.
    pub const INTERACTIVE_LABEL: &'static str = "interactive session";

    /// Resolves an optionally captured caller location.
    ///
    /// Resolution is best-effort: a missing location yields the
    /// interactive-session sentinel instead of an error.
    #[must_use]
    pub fn resolve(location: Option<&'static Location<'static>>) -> Self {
        location.map_or(Self::Interactive, Self::from_location)
    }

    /// Builds an origin from a captured caller location.
    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::Source {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }

    /// Builds an origin from explicit parts.
    #[must_use]
    pub fn from_parts<F: Into<Cow<'static, str>>>(file: F, line: u32) -> Self {
        Self::Source {
            file: file.into(),
            line,
        }
    }

    /// Returns the source file, if the origin is a real location.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Source { file, .. } => Some(file),
            Self::Interactive => None,
        }
    }

    /// Returns the line number; the sentinel reports line 1.
    #[must_use]
    pub const fn line(&self) -> u32 {
        match self {
            Self::Source { line, .. } => *line,
            Self::Interactive => 1,
        }
    }

    /// Reports whether this is the interactive-session sentinel.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source { file, line } => write!(f, "{file}. Line: {line}."),
            Self::Interactive => f.write_str(Self::INTERACTIVE_LABEL),
        }
    }
}
