//! crates/logging/src/logger.rs
//! The public logger facade and its filter-then-route pipeline.

use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};

use archive::ArchiveError;
use levels::{FilterOutcome, LevelSelection, Severity, VisibleLevels};
use record::{Decoration, Origin, Record};

use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::sink::{ConsoleSink, FileSink};

/// Leveled, dual-sink logger.
///
/// One method per severity; each captures its caller's source location,
/// runs the visibility filter, and routes the formatted record to the
/// enabled sinks. Instances share no state: every logger owns its own
/// filter and sink configuration, and two instances pointed at the same
/// log file interleave at filesystem granularity.
///
/// The console writer is a type parameter so output can be captured in
/// memory; [`Logger::new`] fixes it to stdout.
///
/// # Examples
///
/// ```no_run
/// use logging::{LevelSelection, Logger, LoggerConfig};
///
/// let mut logger = Logger::new(LoggerConfig::default())?;
/// logger.info("session opened")?;
///
/// let outcome = logger.set_visible_levels(&LevelSelection::Ranks(vec![4, 5]));
/// assert!(outcome.is_applied());
/// logger.debug("now invisible")?;
/// # Ok::<(), logging::LogError>(())
/// ```
#[derive(Debug)]
pub struct Logger<W = io::Stdout> {
    filter: VisibleLevels,
    file_enabled: bool,
    console_enabled: bool,
    directory: PathBuf,
    file: FileSink,
    console: ConsoleSink<W>,
}

impl Logger<io::Stdout> {
    /// Constructs a logger writing its console output to stdout.
    ///
    /// Bootstraps the log directory and file, then applies the initial
    /// sink and filter configuration. An unresolvable
    /// [`visible_levels`](LoggerConfig::visible_levels) selection is
    /// ignored and the logger starts with every severity visible.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        let console = ConsoleSink::stdout();
        Self::with_console_sink(config, console)
    }

    /// Constructs a logger with the default configuration.
    pub fn with_defaults() -> Result<Self, LogError> {
        Self::new(LoggerConfig::default())
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Constructs a logger over an explicit console writer.
    ///
    /// Used by tests and embedders that capture console output; decoration
    /// is chosen by the caller instead of being probed from stdout.
    pub fn with_console_writer(
        config: LoggerConfig,
        writer: W,
        decoration: Decoration,
    ) -> Result<Self, LogError> {
        Self::with_console_sink(config, ConsoleSink::new(writer, decoration))
    }

    fn with_console_sink(config: LoggerConfig, console: ConsoleSink<W>) -> Result<Self, LogError> {
        let file = FileSink::bootstrap(&config.directory, &config.file_name)?;
        let filter = config
            .visible_levels
            .resolve()
            .unwrap_or_else(VisibleLevels::all);

        Ok(Self {
            filter,
            file_enabled: config.log_to_file,
            console_enabled: config.log_to_console,
            directory: config.directory,
            file,
            console,
        })
    }

    /// Logs a message at [`Severity::Debug`].
    #[track_caller]
    pub fn debug(&mut self, text: &str) -> Result<(), LogError> {
        self.severity_entry(Severity::Debug, text)
    }

    /// Logs a message at [`Severity::Info`].
    #[track_caller]
    pub fn info(&mut self, text: &str) -> Result<(), LogError> {
        self.severity_entry(Severity::Info, text)
    }

    /// Logs a message at [`Severity::Log`].
    #[track_caller]
    pub fn log(&mut self, text: &str) -> Result<(), LogError> {
        self.severity_entry(Severity::Log, text)
    }

    /// Logs a message at [`Severity::Warning`].
    #[track_caller]
    pub fn warning(&mut self, text: &str) -> Result<(), LogError> {
        self.severity_entry(Severity::Warning, text)
    }

    /// Logs a message at [`Severity::Error`].
    #[track_caller]
    pub fn error(&mut self, text: &str) -> Result<(), LogError> {
        self.severity_entry(Severity::Error, text)
    }

    /// Logs a message at [`Severity::Fatal`].
    #[track_caller]
    pub fn fatal(&mut self, text: &str) -> Result<(), LogError> {
        self.severity_entry(Severity::Fatal, text)
    }

    #[track_caller]
    fn severity_entry(&mut self, severity: Severity, text: &str) -> Result<(), LogError> {
        // `#[track_caller]` propagation makes this the first frame outside
        // the logging subsystem.
        let origin = Origin::resolve(Some(Location::caller()));
        self.emit(severity, origin, text)
    }

    /// Logs a message with an explicitly resolved origin.
    ///
    /// Frontends that log on behalf of an interactive session pass
    /// [`Origin::Interactive`] here; the severity methods are a shorthand
    /// over this entry point.
    pub fn emit(&mut self, severity: Severity, origin: Origin, text: &str) -> Result<(), LogError> {
        if !self.filter.contains(severity) {
            // Fast path: dropped messages cause no formatting and no I/O.
            return Ok(());
        }

        let record = Record::new(severity, origin, text);
        if self.console_enabled {
            self.console
                .write_record(&record)
                .map_err(LogError::Console)?;
        }
        if self.file_enabled {
            self.file.append(&record)?;
        }
        Ok(())
    }

    /// Enables or disables the file sink.
    pub fn set_file_logging(&mut self, enabled: bool) {
        self.file_enabled = enabled;
    }

    /// Enables or disables the console sink.
    pub fn set_console_logging(&mut self, enabled: bool) {
        self.console_enabled = enabled;
    }

    /// Reconfigures the visibility filter.
    ///
    /// An unresolvable selection leaves the current filter untouched and
    /// reports [`FilterOutcome::Ignored`].
    pub fn set_visible_levels(&mut self, selection: &LevelSelection) -> FilterOutcome {
        match selection.resolve() {
            Some(filter) => {
                self.filter = filter;
                FilterOutcome::Applied
            }
            None => FilterOutcome::Ignored,
        }
    }

    /// Returns the filter currently in effect.
    #[must_use]
    pub const fn visible_levels(&self) -> VisibleLevels {
        self.filter
    }

    /// Returns the path of the log file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        self.file.path()
    }

    /// Borrows the console sink, e.g. to inspect a captured writer.
    #[must_use]
    pub fn console(&self) -> &ConsoleSink<W> {
        &self.console
    }

    /// Packages the log directory into a timestamped archive in the
    /// current working directory. The live log file is not modified.
    pub fn archive(&self) -> Result<PathBuf, ArchiveError> {
        archive::archive_directory(&self.directory, Path::new("."))
    }

    /// Packages the log directory into a timestamped archive in
    /// `dest_dir`.
    pub fn archive_into(&self, dest_dir: &Path) -> Result<PathBuf, ArchiveError> {
        archive::archive_directory(&self.directory, dest_dir)
    }
}
