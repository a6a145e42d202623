//! crates/logging/src/error.rs
//! Error surface of the logger facade.

use std::io;
use std::path::PathBuf;

/// Error returned when the logger cannot reach one of its sinks.
///
/// Filter misconfiguration never takes this path (it is reported through
/// [`FilterOutcome`](levels::FilterOutcome) instead), and call-site
/// resolution is infallible by construction. What remains is filesystem and
/// stream failure, which propagates to the caller of the logging method.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log directory or file could not be created at construction.
    #[error("failed to prepare log file {}: {source}", path.display())]
    Bootstrap {
        /// Path of the log file that could not be prepared.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// Appending a line to the log file failed.
    #[error("failed to append to log file {}: {source}", path.display())]
    FileWrite {
        /// Path of the log file that rejected the write.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// Writing to the console stream failed.
    #[error("failed to write to console: {0}")]
    Console(#[source] io::Error),
}
