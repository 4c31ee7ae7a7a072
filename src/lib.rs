//! Width-aware console logging.
//!
//! This crate provides a console log sink that filters messages by
//! severity, wraps long lines to the terminal width with indentation, and
//! writes them to standard error with flush ordering against standard
//! output. A `tracing` layer bridges `tracing` events into the sink.
pub mod collector;
pub mod indent;
pub mod severity;
pub mod sink;

pub use collector::LogCollector;
pub use indent::{IndentContext, IndentGuard, IndentProvider, NoIndent};
pub use severity::Severity;
pub use sink::{ConsoleLogSink, LogSink, NoopLogSink, DEFAULT_TERM_WIDTH};
