//! crates/logging/src/config.rs
//! Construction-time configuration for the logger facade.

use std::path::PathBuf;

use levels::LevelSelection;

/// Options recognized when constructing a [`Logger`](crate::Logger).
///
/// The defaults reproduce the reference behavior: both sinks enabled, every
/// severity visible, log file at `log/log.log` relative to the working
/// directory. The path is injectable rather than hardcoded so embedders and
/// tests can point the logger elsewhere.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Whether the file sink starts enabled.
    pub log_to_file: bool,
    /// Whether the console sink starts enabled.
    pub log_to_console: bool,
    /// Initial visibility filter. An unresolvable selection is ignored and
    /// the logger starts with every severity visible.
    pub visible_levels: LevelSelection,
    /// Directory holding the log file; created on construction if absent.
    pub directory: PathBuf,
    /// File name of the log file inside [`directory`](Self::directory).
    pub file_name: String,
}

impl LoggerConfig {
    /// Returns the full path of the log file.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_to_file: true,
            log_to_console: true,
            visible_levels: LevelSelection::All,
            directory: PathBuf::from("log"),
            file_name: String::from("log.log"),
        }
    }
}
