#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the public face of duolog: a leveled, dual-sink logger.
//! Messages enter through one [`Logger`] method per severity, are filtered
//! against the configured set of visible levels, annotated with a timestamp
//! and the resolved call site, and written to whichever of the two sinks is
//! enabled: the interactive console (decorated variant) and an append-only
//! log file (plain variant).
//!
//! # Design
//!
//! The filter check is the fast path: a message whose severity is not in
//! the visible set is dropped before any formatting or I/O happens. Each
//! file write is an independent open/append/close cycle; no handle is held
//! across calls, so external readers can interleave between calls. The
//! console sink is generic over its writer so tests and embedders can
//! capture output in memory.
//!
//! # Invariants
//!
//! - A message reaches a sink iff its severity rank is in the visibility
//!   filter and that sink is enabled.
//! - Routine logging only ever appends to the log file.
//! - Reconfiguring sinks or the filter takes effect on the next call; the
//!   logger never needs to be reconstructed.
//!
//! # Errors
//!
//! Filesystem failures on the log file propagate as [`LogError`] from the
//! severity method that hit them; there is no silent drop-and-continue.
//! Invalid filter selections are deliberately ignored (the prior filter is
//! retained) and the outcome is reported as
//! [`FilterOutcome::Ignored`](levels::FilterOutcome).
//!
//! # Examples
//!
//! ```no_run
//! use logging::{Logger, LoggerConfig};
//!
//! let mut logger = Logger::new(LoggerConfig::default())?;
//! logger.info("transfer started")?;
//! logger.warning("checksum mismatch, retrying")?;
//! # Ok::<(), logging::LogError>(())
//! ```

mod config;
mod error;
mod logger;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use error::LogError;
pub use logger::Logger;
pub use sink::{ConsoleSink, FileSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::DuologLayer;

pub use levels::{FilterOutcome, LevelSelection, Severity, VisibleLevels};
pub use record::{Decoration, Origin, Record};
