//! The console log sink: severity filtering, width-aware wrapping, and
//! ordered writes to the standard streams.
use std::fmt;
use std::io::{self, Write};

use crossterm::terminal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::indent::{IndentProvider, NoIndent};
use crate::severity::Severity;

/// Column count used when the terminal geometry cannot be determined.
pub const DEFAULT_TERM_WIDTH: usize = 80;

/// Destination for log messages, decoupled from any concrete console.
pub trait LogSink: Send + Sync {
    /// Delivers one message at the given severity.
    fn log(&self, severity: Severity, message: &str);
}

/// Sink that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn log(&self, _severity: Severity, _message: &str) {}
}

/// Log sink that writes wrapped plain text to standard error.
///
/// Messages less severe than the construction-time threshold are discarded
/// outright. Warning-or-worse messages flush standard output before the
/// write and standard error after it, so they appear in order when both
/// streams share a terminal. The terminal width is snapshotted once at
/// construction and never re-queried.
///
/// The sink performs no locking; callers that log from multiple threads
/// must serialize access themselves.
pub struct ConsoleLogSink<P = NoIndent> {
    min_severity: Severity,
    term_width: usize,
    indent: P,
}

impl<P: IndentProvider> ConsoleLogSink<P> {
    /// Creates a sink, snapshotting the current terminal width.
    ///
    /// If the geometry query fails or reports zero columns, the width falls
    /// back to [`DEFAULT_TERM_WIDTH`]. The failure is never surfaced.
    pub fn new(min_severity: Severity, indent: P) -> Self {
        let term_width = terminal::size()
            .ok()
            .map(|(cols, _rows)| cols as usize)
            .filter(|&cols| cols > 0)
            .unwrap_or(DEFAULT_TERM_WIDTH);
        Self::with_width(min_severity, term_width, indent)
    }

    /// Creates a sink with a fixed width, skipping the terminal query.
    pub fn with_width(min_severity: Severity, term_width: usize, indent: P) -> Self {
        Self {
            min_severity,
            term_width,
            indent,
        }
    }

    /// Threshold below which messages are discarded.
    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Column count used for wrapping.
    pub fn term_width(&self) -> usize {
        self.term_width
    }

    /// Wraps `text` into terminal-width lines, each prefixed with the
    /// current indent.
    ///
    /// Embedded newlines are preserved as hard wrap points, independent of
    /// the accumulated line length. A partial final line is appended without
    /// a trailing newline; empty input yields empty output. Column positions
    /// are measured in display columns, so double-width characters count
    /// twice and control characters not at all.
    pub fn wrap_text(&self, text: &str) -> String {
        let indent = self.indent.current_indent();
        let indent_cols = UnicodeWidthStr::width(indent.as_str());

        let mut wrapped = String::new();
        let mut line = indent.clone();
        let mut cols = indent_cols;
        for ch in text.chars() {
            line.push(ch);
            cols += UnicodeWidthChar::width(ch).unwrap_or(0);

            // An explicit newline commits the pending line as-is; checking it
            // first keeps a break that lands exactly on the width boundary
            // from committing twice.
            if ch == '\n' {
                wrapped.push_str(&line);
                line.truncate(0);
                line.push_str(&indent);
                cols = indent_cols;
            } else if cols >= self.term_width {
                wrapped.push_str(&line);
                wrapped.push('\n');
                line.truncate(0);
                line.push_str(&indent);
                cols = indent_cols;
            }
        }

        // Whatever is still pending, unless it is just the bare indent.
        if line != indent {
            wrapped.push_str(&line);
        }
        wrapped
    }

    /// Logs `message`, wrapped, to standard error.
    pub fn log(&self, severity: Severity, message: &str) {
        self.log_to(severity, message, &mut io::stdout(), &mut io::stderr());
    }

    /// Logs a `format_args!` template.
    ///
    /// The message is rendered into a growable buffer, so arbitrarily long
    /// substitutions are never truncated. Rendering is skipped entirely for
    /// messages below the threshold.
    pub fn log_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_fmt_to(severity, args, &mut io::stdout(), &mut io::stderr());
    }

    fn log_fmt_to<O: Write, E: Write>(
        &self,
        severity: Severity,
        args: fmt::Arguments<'_>,
        out: &mut O,
        err: &mut E,
    ) {
        if severity > self.min_severity {
            return;
        }
        self.log_to(severity, &args.to_string(), out, err);
    }

    fn log_to<O: Write, E: Write>(
        &self,
        severity: Severity,
        message: &str,
        out: &mut O,
        err: &mut E,
    ) {
        // Skip messages which aren't important enough.
        if severity > self.min_severity {
            return;
        }

        // Keep older stdout output ahead of this message on a shared terminal.
        if severity <= Severity::Warning {
            let _ = out.flush();
        }

        let wrapped = self.wrap_text(message);
        let _ = err.write_all(wrapped.as_bytes());

        // Make the message visible before lower-severity output that follows.
        if severity <= Severity::Warning {
            let _ = err.flush();
        }
    }
}

impl<P: IndentProvider + Send + Sync> LogSink for ConsoleLogSink<P> {
    fn log(&self, severity: Severity, message: &str) {
        ConsoleLogSink::log(self, severity, message);
    }
}

impl<P> Drop for ConsoleLogSink<P> {
    fn drop(&mut self) {
        // Commit anything still buffered on stdout before the sink goes away.
        let _ = io::stdout().flush();
    }
}
