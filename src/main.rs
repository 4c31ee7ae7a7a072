//! Demo binary for the termlog console sink.
//!
//! Writes a handful of messages at different severities, shows indentation
//! guards and wrapping, then routes `tracing` events through the same sink.
use anyhow::{anyhow, Result};
use clap::Parser;

use termlog::{ConsoleLogSink, IndentContext, LogCollector, Severity};

#[derive(Parser, Debug, Clone)]
#[command(name = "termlog")]
#[command(about = "Width-aware console log sink demo")]
pub struct AppArgs {
    #[arg(long, default_value = "info", help = "Minimum severity to emit")]
    pub level: Severity,

    #[arg(long, help = "Fixed output width (terminal width if not specified)")]
    pub width: Option<usize>,

    #[arg(long, default_value = "    ", help = "Indent unit per nesting level")]
    pub indent_unit: String,
}

fn main() -> Result<()> {
    let args = AppArgs::parse();

    let indent = IndentContext::new(args.indent_unit);
    let sink = match args.width {
        Some(width) => ConsoleLogSink::with_width(args.level, width, indent.clone()),
        None => ConsoleLogSink::new(args.level, indent.clone()),
    };

    println!("normal output on stdout");

    sink.log_fmt(
        Severity::Info,
        format_args!("sink ready, wrapping to {} columns\n", sink.term_width()),
    );
    {
        let _guard = indent.indent();
        sink.log(
            Severity::Debug,
            "nested detail, shown only with --level debug\n",
        );
        sink.log(
            Severity::Warning,
            "warnings flush stdout first so the lines above stay in order\n",
        );
    }
    sink.log(
        Severity::Error,
        &format!("{}\n", "a long diagnostic line that wraps ".repeat(4)),
    );

    // Route `tracing` events through the same sink.
    LogCollector::init_subscriber(sink)
        .map_err(|e| anyhow!("failed to install log collector: {e}"))?;
    tracing::info!(level = %args.level, "tracing bridge installed");
    tracing::debug!("debug events also honor the sink threshold");

    Ok(())
}
