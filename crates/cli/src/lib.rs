#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line frontend of duolog. It parses arguments,
//! builds a [`Logger`](logging::Logger) from them, and dispatches one of
//! two commands: `log`, which records a single message on behalf of the
//! interactive session, and `archive`, which packages the log directory
//! into a timestamped archive.
//!
//! Messages logged through the CLI carry the interactive-session origin:
//! the command line has no enclosing call frame to resolve.

mod args;
mod run;

pub use args::{Cli, Command};
pub use run::{CliError, run_with};
