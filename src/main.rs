//! ircsyntax - parse IRC protocol lines from stdin
//!
//! Each line is tokenized, dispatched through the operation registry and
//! printed as a typed message.

mod config;
mod dump;

use crate::config::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// What the binary does with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Parse,
    Manifest,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1).peekable();
    let mode = match args.peek().map(String::as_str) {
        Some("parse") => {
            args.next();
            Mode::Parse
        }
        Some("manifest") => {
            args.next();
            Mode::Manifest
        }
        _ => Mode::Parse,
    };
    let config_path = args.next();

    let config = match &config_path {
        Some(path) => Config::load(path).map_err(|e| {
            // Logging is not up yet.
            eprintln!("Failed to load config {}: {}", path, e);
            e
        })?,
        None => Config::default(),
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        mode = ?mode,
        config = config_path.as_deref().unwrap_or("<defaults>"),
        "Starting ircsyntax"
    );

    match mode {
        Mode::Parse => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            dump::run(stdin.lock(), stdout.lock(), config.parser, &config.output).map_err(
                |e| {
                    error!(error = %e, "Failed to process input");
                    e
                },
            )?;
        }
        Mode::Manifest => dump::manifest(io::stdout().lock())?,
    }

    Ok(())
}
