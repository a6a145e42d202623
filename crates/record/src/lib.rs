#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `record` builds the ephemeral log entry that flows through the duolog
//! pipeline: the resolved call site of the logging call, the wall-clock
//! timestamp taken at formatting time, and the free-text message. A
//! [`Record`] is rendered into exactly two strings, a plain variant for the
//! on-disk log line and a decorated variant for the interactive console,
//! and then discarded. Nothing is cached across calls.
//!
//! # Design
//!
//! [`Origin`] replaces the reference design's fixed stack-frame skip count
//! with `#[track_caller]` propagation: the facade captures
//! [`Location::caller`](std::panic::Location::caller) on entry, and
//! [`Origin::resolve`] substitutes the interactive-session sentinel whenever
//! no location is supplied. Resolution is best-effort and never fails.
//!
//! The two render variants carry identical logical fields; only the markup
//! differs. The decorated variant wraps the severity tag and timestamp in
//! ANSI emphasis and renders a real-file origin as an OSC 8 terminal
//! hyperlink encoding `{file, line}` so capable terminals can jump to the
//! source location. The interactive sentinel is never linked.
//!
//! # Examples
//!
//! ```
//! use levels::Severity;
//! use record::{Decoration, Origin, Record};
//!
//! let record = Record::new(Severity::Info, Origin::from_parts("src/main.rs", 42), "ready");
//! let line = record.render_plain();
//!
//! assert!(line.starts_with("[INFO]["));
//! assert!(line.ends_with("[src/main.rs. Line: 42.] Message: ready"));
//! assert_eq!(record.render_console(Decoration::Plain), line);
//! ```

mod origin;
mod render;
mod timestamp;

pub use origin::Origin;
pub use render::{Decoration, Record};
pub use timestamp::Timestamp;
