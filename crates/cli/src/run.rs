//! crates/cli/src/run.rs
//! Command dispatch for the duolog binary.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use logging::{Logger, LoggerConfig};
use record::{Decoration, Origin};

use crate::args::{Cli, Command};

/// Error surfaced by a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The logger could not be constructed or could not write.
    #[error(transparent)]
    Log(#[from] logging::LogError),

    /// The archive collaborator failed.
    #[error(transparent)]
    Archive(#[from] archive::ArchiveError),

    /// Reporting to the output stream failed.
    #[error("failed to write to output: {0}")]
    Io(#[from] io::Error),
}

/// Parses `args` and runs the selected command.
///
/// Diagnostics go to `stderr` and command output to `stdout`; the returned
/// exit code mirrors success or failure so `main` can stay a one-liner.
pub fn run_with<I, T, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let rendered = err.render();
            if err.use_stderr() {
                let _ = write!(stderr, "{rendered}");
                return ExitCode::FAILURE;
            }
            // --help and --version are successful exits.
            let _ = write!(stdout, "{rendered}");
            return ExitCode::SUCCESS;
        }
    };

    match dispatch(cli, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(stderr, "duolog: {err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch<Out>(cli: Cli, stdout: &mut Out) -> Result<(), CliError>
where
    Out: Write,
{
    match cli.command {
        Command::Log {
            message,
            severity,
            visible,
            no_file,
            no_console,
            log_dir,
        } => {
            let config = LoggerConfig {
                log_to_file: !no_file,
                log_to_console: !no_console,
                visible_levels: visible,
                directory: log_dir,
                ..Default::default()
            };
            let decoration = if io::stdout().is_terminal() {
                Decoration::Styled
            } else {
                Decoration::Plain
            };

            let mut logger = Logger::with_console_writer(config, &mut *stdout, decoration)?;
            // A message typed on the command line has no call frame to
            // resolve; it carries the interactive-session origin.
            logger.emit(severity, Origin::Interactive, &message)?;
            Ok(())
        }
        Command::Archive { log_dir, into } => {
            let archive_path = archive::archive_directory(&log_dir, &into)?;
            writeln!(stdout, "archived log directory to {}", archive_path.display())?;
            Ok(())
        }
    }
}
