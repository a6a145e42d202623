//! Integration tests for enabling and disabling sinks at runtime.
//!
//! Sink toggles are independent of the visibility filter and take effect
//! immediately, without reconstructing the logger.

use std::fs;
use std::path::Path;

use logging::{Decoration, Logger, LoggerConfig};

fn scratch_logger(dir: &Path) -> Logger<Vec<u8>> {
    let config = LoggerConfig {
        directory: dir.join("log"),
        ..Default::default()
    };
    Logger::with_console_writer(config, Vec::new(), Decoration::Plain)
        .expect("construction succeeds")
}

// ============================================================================
// File sink
// ============================================================================

#[test]
fn disabling_the_file_sink_stops_all_file_writes() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let mut logger = scratch_logger(scratch.path());

    logger.set_file_logging(false);
    logger.info("invisible on disk").expect("info");
    logger.fatal("also invisible on disk").expect("fatal");

    let file = fs::read(logger.file_path()).expect("readable");
    assert!(file.is_empty());
    // The console keeps receiving both messages.
    let console = String::from_utf8(logger.console().get_ref().clone()).expect("utf-8");
    assert_eq!(console.lines().count(), 2);
}

#[test]
fn reenabling_the_file_sink_resumes_writes() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let mut logger = scratch_logger(scratch.path());

    logger.set_file_logging(false);
    logger.info("skipped").expect("info");
    logger.set_file_logging(true);
    logger.info("resumed").expect("info");

    let content = fs::read_to_string(logger.file_path()).expect("readable");
    assert!(!content.contains("Message: skipped"));
    assert!(content.contains("Message: resumed"));
}

// ============================================================================
// Console sink
// ============================================================================

#[test]
fn disabling_the_console_sink_keeps_file_writes() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let mut logger = scratch_logger(scratch.path());

    logger.set_console_logging(false);
    logger.warning("file only").expect("warning");

    assert!(logger.console().get_ref().is_empty());
    let content = fs::read_to_string(logger.file_path()).expect("readable");
    assert!(content.contains("Message: file only"));
}

#[test]
fn both_sinks_disabled_is_silent_but_not_an_error() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let mut logger = scratch_logger(scratch.path());

    logger.set_file_logging(false);
    logger.set_console_logging(false);
    logger.error("nowhere to go").expect("error");

    assert!(logger.console().get_ref().is_empty());
    let file = fs::read(logger.file_path()).expect("readable");
    assert!(file.is_empty());
}
