//! crates/logging/src/sink/console.rs
//! Interactive console sink carrying the decorated variant.

use std::io::{self, Write};

use is_terminal::IsTerminal;
use record::{Decoration, Record};

/// Sink that writes the decorated variant of each record to a console
/// stream.
///
/// The sink is generic over its writer so tests and embedders can capture
/// output in a `Vec<u8>`. Decoration is fixed at construction:
/// [`ConsoleSink::stdout`] picks [`Decoration::Styled`] only when stdout is
/// attached to a terminal, so redirected output degrades to the plain
/// rendering.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    writer: W,
    decoration: Decoration,
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink on the process stdout, auto-detecting decoration.
    #[must_use]
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let decoration = if stdout.is_terminal() {
            Decoration::Styled
        } else {
            Decoration::Plain
        };
        Self::new(stdout, decoration)
    }
}

impl<W> ConsoleSink<W> {
    /// Creates a sink over an explicit writer and decoration mode.
    #[must_use]
    pub fn new(writer: W, decoration: Decoration) -> Self {
        Self { writer, decoration }
    }

    /// Returns the decoration mode in effect.
    #[must_use]
    pub const fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Writes one record as a decorated line and flushes the stream.
    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.writer, "{}", record.render_console(self.decoration))?;
        self.writer.flush()
    }
}
