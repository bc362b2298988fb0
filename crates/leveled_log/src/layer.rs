//! Provides a [`tracing_subscriber::Layer`] ([`LoggerLayer`]) that forwards `tracing` events to
//! a [`Logger`].

use std::{fmt, sync::Arc};

use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, layer::Context};

use crate::{CallSite, Level, Logger};

const MESSAGE: &str = "message";

/// A [`tracing_subscriber::Layer`] writing every event it sees through a [`Logger`].
///
/// Only the event's `message` field is written (the event target when there is none); other
/// fields are ignored. The line is attributed to the file and line recorded in the event
/// metadata. Level filtering is left to the logger's targets.
#[derive(Debug, Clone)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    /// Creates a layer writing through `logger`.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

/// Captures the `message` field of an event.
#[derive(Debug, Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // `record_str()` is preferred for `message`
        if field.name() == MESSAGE && self.message.is_none() {
            self.message = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor
            .message
            .as_deref()
            .unwrap_or_else(|| metadata.target());

        let call_site = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => CallSite::new(file, line),
            _ => CallSite::unknown(),
        };

        self.logger
            .log(level, call_site, format_args!("{message}"));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use std::num::NonZeroUsize;

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::target::SizeRotatingFileTarget;

    #[test]
    fn forwards_events_with_their_call_site() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracing.log");
        let logger = Arc::new(Logger::new(false).with_target(SizeRotatingFileTarget::new(
            Level::Info,
            1 << 20,
            NonZeroUsize::new(2).unwrap(),
            &path,
        )));

        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));
        let warn_line = tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("filtered by the target");
            tracing::info!(user = "alice", "user {} signed in", 42);
            let warn_line = line!() + 1;
            tracing::warn!("disk almost full");
            warn_line
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" INFO  user 42 signed in [layer.rs:"));
        assert!(!lines[0].contains("alice"));
        assert!(lines[1].ends_with(&format!(" WARN  disk almost full [layer.rs:{warn_line}]")));
    }

    #[test]
    fn maps_tracing_levels() {
        assert_eq!(Level::from(tracing::Level::TRACE), Level::Trace);
        assert_eq!(Level::from(tracing::Level::DEBUG), Level::Debug);
        assert_eq!(Level::from(tracing::Level::INFO), Level::Info);
        assert_eq!(Level::from(tracing::Level::WARN), Level::Warn);
        assert_eq!(Level::from(tracing::Level::ERROR), Level::Error);
    }
}
