// src/logging.rs
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_ENV: &str = "CAREER_LOG_FILE";

/// Human-readable logs on stderr, plus JSON lines to `CAREER_LOG_FILE` when set.
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_directives = if verbose {
        "career_compass=debug,rocket=info"
    } else {
        "career_compass=info,rocket=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let file_layer = match std::env::var(LOG_FILE_ENV) {
        Ok(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        Err(_) => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")
}
