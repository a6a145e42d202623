#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levels` defines the severity taxonomy shared across the duolog workspace
//! and the visibility filter that decides which severities may reach a sink.
//! The taxonomy is a closed, totally ordered set of six severities; the
//! filter is a set of severities addressed by their stable integer ranks.
//!
//! # Design
//!
//! [`Severity`] is the only representation of a log level in the workspace.
//! Raw ranks enter through [`Severity::from_rank`] and nowhere else, so an
//! out-of-range rank is unrepresentable downstream. [`VisibleLevels`] stores
//! the filter as a bitmask over ranks, making membership checks a single
//! mask test on the logging fast path. [`LevelSelection`] is the
//! configuration-facing input: the tokens `all` and `none`, or an explicit
//! rank list.
//!
//! # Invariants
//!
//! - Ranks are stable and contiguous: `Debug` is 0, `Fatal` is 5.
//! - Applying a [`LevelSelection`] either replaces the whole filter or
//!   leaves it untouched; there is no partial application. A selection
//!   containing any invalid rank resolves to nothing and the caller keeps
//!   its prior filter, reporting [`FilterOutcome::Ignored`].
//!
//! # Examples
//!
//! ```
//! use levels::{LevelSelection, Severity, VisibleLevels};
//!
//! let filter = LevelSelection::Ranks(vec![4, 5])
//!     .resolve()
//!     .expect("ranks 4 and 5 are valid");
//!
//! assert!(filter.contains(Severity::Fatal));
//! assert!(!filter.contains(Severity::Debug));
//! assert_eq!(VisibleLevels::default(), VisibleLevels::all());
//! ```

mod filter;
mod selection;
mod severity;

pub use filter::VisibleLevels;
pub use selection::{FilterOutcome, LevelSelection};
pub use severity::Severity;
