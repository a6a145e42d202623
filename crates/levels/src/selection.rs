//! crates/levels/src/selection.rs
//! Configuration input for the visibility filter.

use std::str::FromStr;

use super::filter::VisibleLevels;

/// Filter configuration as supplied by callers.
///
/// A single rank is normalized to a one-element list at the parsing layer;
/// the facade only ever sees a whole selection.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelSelection {
    /// Every severity visible.
    All,
    /// No severity visible.
    None,
    /// Exactly the listed ranks visible.
    Ranks(Vec<u8>),
}

impl LevelSelection {
    /// Selection containing a single rank.
    #[must_use]
    pub fn single(rank: u8) -> Self {
        Self::Ranks(vec![rank])
    }

    /// Resolves the selection into a concrete filter set.
    ///
    /// Returns `None` when the selection names any invalid rank. The caller
    /// is expected to keep its prior filter in that case.
    #[must_use]
    pub fn resolve(&self) -> Option<VisibleLevels> {
        match self {
            Self::All => Some(VisibleLevels::all()),
            Self::None => Some(VisibleLevels::none()),
            Self::Ranks(ranks) => VisibleLevels::from_ranks(ranks),
        }
    }
}

impl Default for LevelSelection {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for LevelSelection {
    type Err = String;

    /// Parses a selection token: `all`, `none`, or a comma-separated rank
    /// list such as `4,5`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "" => Err("empty level selection".to_string()),
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            _ => {
                let ranks = token
                    .split(',')
                    .map(str::trim)
                    .map(|part| {
                        part.parse::<u8>()
                            .map_err(|_| format!("invalid rank in selection: {part}"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Ranks(ranks))
            }
        }
    }
}

/// Result of applying a [`LevelSelection`] to a logger.
///
/// The filter deliberately ignores invalid selections instead of failing,
/// but the outcome stays observable so callers and tests can distinguish
/// "configured" from "silently rejected".
#[must_use = "the outcome reports whether the selection was applied or ignored"]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterOutcome {
    /// The selection replaced the previous filter.
    Applied,
    /// The selection was invalid; the previous filter is retained.
    Ignored,
}

impl FilterOutcome {
    /// Reports whether the selection took effect.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
