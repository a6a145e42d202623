//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the dual-sink pipeline.
//!
//! The layer lets code written against the standard tracing macros
//! (`trace!`, `debug!`, `info!`, `warn!`, `error!`) flow through a
//! [`Logger`] without adopting its API. Events are mapped onto the native
//! severity taxonomy: `TRACE` and `DEBUG` collapse onto
//! [`Severity::Debug`], and no tracing level maps to [`Severity::Log`] or
//! [`Severity::Fatal`]; those remain reachable only through the facade.

use std::fmt::Write as _;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use levels::Severity;
use record::Origin;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;

/// A tracing-subscriber layer routing events into a [`Logger`].
///
/// The logger is wrapped in a mutex because subscriber callbacks take
/// `&self`; events serialize on that lock.
pub struct DuologLayer<W> {
    logger: Mutex<Logger<W>>,
}

impl<W> DuologLayer<W> {
    /// Wraps a logger for installation into a subscriber stack.
    #[must_use]
    pub fn new(logger: Logger<W>) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Consumes the layer and returns the wrapped logger.
    #[must_use]
    pub fn into_inner(self) -> Logger<W> {
        self.logger.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn severity_for(level: &Level) -> Severity {
        if *level == Level::ERROR {
            Severity::Error
        } else if *level == Level::WARN {
            Severity::Warning
        } else if *level == Level::INFO {
            Severity::Info
        } else {
            Severity::Debug
        }
    }
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        }
    }
}

impl<S, W> Layer<S> for DuologLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        let metadata = event.metadata();
        let origin = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Origin::from_parts(file, line),
            _ => Origin::Interactive,
        };

        if let Ok(mut logger) = self.logger.lock() {
            // Subscriber callbacks cannot propagate sink failure; a failed
            // write drops the event.
            let _ = logger.emit(Self::severity_for(metadata.level()), origin, &visitor.message);
        }
    }
}
