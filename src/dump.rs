//! Line-by-line parsing of an input stream.

use crate::config::{OutputConfig, OutputFormat};
use irc_syntax_core::{Message, MessageBuilder, Parser, ParserConfig, OPERATIONS};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub parsed: usize,
    pub failed: usize,
}

/// Parse every line of `input` and write one rendering per line to `output`.
///
/// Failed lines are logged and skipped; only I/O failures abort the run.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    parser: ParserConfig,
    out: &OutputConfig,
) -> anyhow::Result<Summary> {
    let mut parser = Parser::with_config(MessageBuilder, parser);
    let mut summary = Summary::default();
    let mut buffer = Vec::new();
    let mut number = 0usize;

    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        number += 1;

        let raw = strip_newline(&buffer);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                summary.failed += 1;
                warn!(line = number, details = %e, "Invalid UTF-8 in line");
                if out.show_errors {
                    writeln!(output, "error: invalid UTF-8: {}", e)?;
                }
                continue;
            }
        };

        match parser.parse(line) {
            Ok(Some(message)) => {
                summary.parsed += 1;
                debug!(line = number, operation = %message.operation(), "parsed");
                write_message(&mut output, &message, out.format)?;
            }
            Ok(None) => summary.parsed += 1,
            Err(e) => {
                summary.failed += 1;
                warn!(line = number, code = e.error_code(), error = %e, "Failed to parse line");
                if out.show_errors {
                    writeln!(output, "error: {}", e)?;
                }
            }
        }
    }

    output.flush()?;
    info!(
        parsed = summary.parsed,
        failed = summary.failed,
        "Finished parsing input"
    );
    Ok(summary)
}

/// Drop the `\n` or `\r\n` terminator, as `BufRead::lines` does.
fn strip_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn write_message<W: Write>(
    output: &mut W,
    message: &Message,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Debug => writeln!(output, "{:?}", message)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, message)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

/// Write the operation registry as pretty JSON.
pub fn manifest<W: Write>(mut output: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut output, OPERATIONS)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
