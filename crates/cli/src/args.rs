//! crates/cli/src/args.rs
//! Argument surface of the duolog binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use levels::{LevelSelection, Severity};

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(
    name = "duolog",
    version,
    about = "Leveled dual-sink logging utility",
    propagate_version = true
)]
pub struct Cli {
    /// The command to dispatch.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands understood by the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log one message on behalf of the interactive session.
    Log {
        /// The message text.
        message: String,

        /// Severity of the message.
        #[arg(long, default_value = "info")]
        severity: Severity,

        /// Visible levels: `all`, `none`, or a comma-separated rank list
        /// such as `4,5`.
        #[arg(long, default_value = "all")]
        visible: LevelSelection,

        /// Disable the file sink for this invocation.
        #[arg(long)]
        no_file: bool,

        /// Disable the console sink for this invocation.
        #[arg(long)]
        no_console: bool,

        /// Directory holding the log file.
        #[arg(long, default_value = "log")]
        log_dir: PathBuf,
    },

    /// Package the log directory into a timestamped archive.
    Archive {
        /// Directory holding the log file.
        #[arg(long, default_value = "log")]
        log_dir: PathBuf,

        /// Directory receiving the archive.
        #[arg(long, default_value = ".")]
        into: PathBuf,
    },
}
