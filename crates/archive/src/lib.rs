#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `archive` packages a log directory into a single timestamped `.tar.gz`
//! file. It is the external collaborator behind the logger's archive
//! trigger: given no more than a source directory and a destination, it
//! produces one compressed archive of the directory's full contents and
//! leaves the live log file untouched.
//!
//! # Errors
//!
//! A missing log directory and any I/O failure during packaging propagate
//! to the caller as [`ArchiveError`]; there is no local recovery.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! let archive = archive::archive_directory(Path::new("log"), Path::new("."))?;
//! assert!(archive.file_name().is_some());
//! # Ok::<(), archive::ArchiveError>(())
//! ```

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, HeaderMode};
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Timestamp format embedded in archive file names.
const ARCHIVE_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[day padding:zero]-[month padding:zero]-[year repr:last_two]_[hour padding:zero]-[minute padding:zero]-[second padding:zero]"
);

/// Error returned when packaging the log directory fails.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The log directory does not exist.
    #[error("log directory {} does not exist", path.display())]
    MissingLogDirectory {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// The archive timestamp could not be rendered.
    #[error("failed to render archive timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    /// An underlying filesystem or compression write failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Packages the full contents of `log_dir` into a timestamped archive.
///
/// The archive is written to `dest_dir` as
/// `log-<DD-MM-YY_HH-MM-SS>.tar.gz`, with the log directory's own name as
/// the top-level entry so extraction reproduces the directory as it was at
/// the moment of invocation. The source directory is only read, never
/// modified.
pub fn archive_directory(log_dir: &Path, dest_dir: &Path) -> Result<PathBuf, ArchiveError> {
    if !log_dir.is_dir() {
        return Err(ArchiveError::MissingLogDirectory {
            path: log_dir.to_path_buf(),
        });
    }

    fs::create_dir_all(dest_dir)?;
    let archive_path = dest_dir.join(archive_file_name(OffsetDateTime::now_utc())?);

    let archive_file = File::create(&archive_path)?;
    let encoder = GzEncoder::new(archive_file, Compression::default());
    let mut builder = Builder::new(encoder);
    builder.mode(HeaderMode::Deterministic);

    let root = log_dir
        .file_name()
        .map_or_else(|| PathBuf::from("log"), PathBuf::from);
    builder.append_dir_all(&root, log_dir)?;

    builder.into_inner()?.finish()?.sync_all()?;
    Ok(archive_path)
}

fn archive_file_name(stamp: OffsetDateTime) -> Result<String, ArchiveError> {
    Ok(format!("log-{}.tar.gz", stamp.format(ARCHIVE_TIMESTAMP_FORMAT)?))
}
