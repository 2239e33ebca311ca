//! File logging
//!
//! The terminal belongs to the UI, so log output goes to
//! `gitbrama.log` in the local data directory. Tail it with
//! `tail -f`. Verbosity comes from `-v` flags, or from a
//! `GITBRAMA_LOG` filter directive which wins when set.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "gitbrama.log";
const LOG_ENV: &str = "GITBRAMA_LOG";

/// Map `-v` count to a filter directive
fn level_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        _ => Some("debug"),
    }
}

/// Pick the filter: a set `GITBRAMA_LOG` wins, else the `-v` count
///
/// `None` means logging is off. A malformed directive is an error.
fn build_filter(env: Option<&str>, verbosity: u8) -> Result<Option<EnvFilter>> {
    match env {
        Some(directive) => EnvFilter::try_new(directive)
            .map(Some)
            .with_context(|| format!("Invalid {} directive '{}'", LOG_ENV, directive)),
        None => Ok(level_directive(verbosity).map(EnvFilter::new)),
    }
}

/// Install the global subscriber; does nothing when logging is off
pub fn init(verbosity: u8, dir: &Path) -> Result<()> {
    let env = match std::env::var_os(LOG_ENV) {
        Some(value) => Some(
            value
                .into_string()
                .map_err(|_| anyhow::anyhow!("{} is not valid UTF-8", LOG_ENV))?,
        ),
        None => None,
    };

    let Some(filter) = build_filter(env.as_deref(), verbosity)? else {
        return Ok(());
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to install logger")?;

    Ok(())
}
