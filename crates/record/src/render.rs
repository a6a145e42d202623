//! crates/record/src/render.rs
//! The ephemeral log entry and its two render variants.

use anstyle::Style;
use levels::Severity;

use super::origin::Origin;
use super::timestamp::Timestamp;

/// Emphasis applied to the tag and timestamp of the decorated variant.
const EMPHASIS: Style = Style::new().bold();

/// Controls whether the console variant carries ANSI markup.
///
/// `Plain` degrades the decorated variant to the exact plain rendering, for
/// consoles that are not interactive terminals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decoration {
    /// Emphasis markup and source-navigation hyperlinks.
    Styled,
    /// The plain rendering, byte-for-byte.
    Plain,
}

impl Default for Decoration {
    fn default() -> Self {
        Self::Styled
    }
}

/// One log entry, composed at dispatch time and discarded after rendering.
///
/// The timestamp is captured when the record is constructed, which is the
/// moment the message passes the visibility filter. Both render variants
/// carry the same severity tag, timestamp, origin and text; only the markup
/// differs.
#[derive(Clone, Debug)]
pub struct Record {
    severity: Severity,
    timestamp: Timestamp,
    origin: Origin,
    text: String,
}

impl Record {
    /// Composes a record, stamping it with the current wall-clock time.
    #[must_use]
    pub fn new<T: Into<String>>(severity: Severity, origin: Origin, text: T) -> Self {
        Self {
            severity,
            timestamp: Timestamp::now(),
            origin,
            text: text.into(),
        }
    }

    /// Returns the record severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the resolved origin.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Returns the free-text message.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the capture timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Renders the plain variant stored in the log file.
    ///
    /// The sink appends the line terminator.
    #[must_use]
    pub fn render_plain(&self) -> String {
        format!(
            "{}{}[{}] Message: {}",
            self.severity.tag(),
            self.timestamp.bracketed(),
            self.origin,
            self.text
        )
    }

    /// Renders the decorated variant shown on the interactive console.
    ///
    /// The severity tag and timestamp are wrapped in emphasis markup, and a
    /// real-file origin becomes a terminal hyperlink carrying `{file, line}`.
    /// The interactive sentinel is shown as plain text with no link.
    #[must_use]
    pub fn render_console(&self, decoration: Decoration) -> String {
        match decoration {
            Decoration::Plain => self.render_plain(),
            Decoration::Styled => {
                let origin = match &self.origin {
                    Origin::Source { file, line } => source_hyperlink(file, *line),
                    Origin::Interactive => self.origin.to_string(),
                };
                format!(
                    "{}{}{}{}[{}] Message: {}",
                    EMPHASIS.render(),
                    self.severity.tag(),
                    self.timestamp.bracketed(),
                    EMPHASIS.render_reset(),
                    origin,
                    self.text
                )
            }
        }
    }
}

/// Wraps a source origin in an OSC 8 terminal hyperlink.
///
/// The link target encodes the file and line; how a terminal or editor
/// interprets it is environment-specific, and terminals without OSC 8
/// support render the label text unchanged.
fn source_hyperlink(file: &str, line: u32) -> String {
    format!("\u{1b}]8;;file://{file}#L{line}\u{1b}\\{file}. Line: {line}.\u{1b}]8;;\u{1b}\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            Severity::Warning,
            Origin::from_parts("src/worker.rs", 7),
            "queue is draining slowly",
        )
    }

    #[test]
    fn plain_variant_matches_line_format() {
        let record = sample();
        let line = record.render_plain();
        assert!(line.starts_with("[WARNING]["));
        assert!(line.ends_with("[src/worker.rs. Line: 7.] Message: queue is draining slowly"));
    }

    #[test]
    fn variants_carry_identical_fields() {
        let record = sample();
        let plain = record.render_plain();
        let styled = record.render_console(Decoration::Styled);

        assert!(styled.contains(record.severity().tag()));
        assert!(styled.contains(&record.timestamp().bracketed()));
        assert!(styled.contains("src/worker.rs"));
        assert!(styled.contains("Line: 7."));
        assert!(styled.contains("Message: queue is draining slowly"));
        assert_ne!(styled, plain);
    }

    #[test]
    fn plain_decoration_degrades_to_plain_variant() {
        let record = sample();
        assert_eq!(record.render_console(Decoration::Plain), record.render_plain());
    }

    #[test]
    fn source_origin_is_hyperlinked() {
        let record = sample();
        let styled = record.render_console(Decoration::Styled);
        assert!(styled.contains("\u{1b}]8;;file://src/worker.rs#L7\u{1b}\\"));
    }

    #[test]
    fn interactive_origin_is_never_linked() {
        let record = Record::new(Severity::Info, Origin::Interactive, "hello");
        let styled = record.render_console(Decoration::Styled);
        assert!(styled.contains(Origin::INTERACTIVE_LABEL));
        assert!(!styled.contains("]8;;"));
    }

    #[test]
    fn records_are_fresh_per_call() {
        let first = sample();
        let second = sample();
        assert!(second.timestamp() >= first.timestamp());
    }
}
