//! A `tracing` layer that forwards events to a [`LogSink`].
//!
//! Events are rendered to plain text (message first, then any remaining
//! fields as `key=value` pairs) and handed to the sink with their level
//! mapped to a [`Severity`]. Severity filtering is left to the sink; the
//! layer forwards every event.
use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    Layer,
};

use crate::severity::Severity;
use crate::sink::LogSink;

/// Collects `tracing` events and delivers them to a [`LogSink`].
pub struct LogCollector<S> {
    sink: S,
}

impl<S: LogSink + 'static> LogCollector<S> {
    /// Creates a new collector around `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Installs the collector as the global default subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global default subscriber is already set.
    pub fn init_subscriber(sink: S) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let collector = LogCollector::new(sink);
        let subscriber = tracing_subscriber::registry().with(collector);
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }
}

impl<Sub, S> Layer<Sub> for LogCollector<S>
where
    Sub: Subscriber + for<'a> LookupSpan<'a>,
    S: LogSink + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let severity = Severity::from(*event.metadata().level());

        let mut text = EventText::default();
        event.record(&mut text);

        self.sink.log(severity, &text.render());
    }
}

/// Renders an event's fields into a single plain-text line.
#[derive(Default)]
struct EventText {
    message: String,
    fields: String,
}

impl EventText {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = fmt::Write::write_fmt(&mut self.fields, format_args!("{name}={value}"));
    }

    /// Message, then fields, then the line break events don't carry.
    fn render(mut self) -> String {
        if !self.fields.is_empty() {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            self.message.push_str(&self.fields);
        }
        self.message.push('\n');
        self.message
    }
}

impl tracing::field::Visit for EventText {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}
