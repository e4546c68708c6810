//! fv - A terminal file viewer with incremental search.
//!
//! # Usage
//!
//! ```bash
//! fv server.log
//! RUST_LOG=fv::perf=debug fv --log-file fv.log server.log
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fv::app::App;

/// A terminal file viewer with incremental search and line filtering
#[derive(Parser, Debug)]
#[command(name = "fv", version, about, long_about = None)]
struct Cli {
    /// File to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` overrides the level. Without it, a log file records `fv`
/// at info level and stderr only gets warnings, since stderr shares the
/// screen with the viewer.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_directive = if log_file.is_some() { "fv=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    tracing::debug!(file = %cli.file.display(), "starting");

    App::new(cli.file).run().context("Application error")
}
