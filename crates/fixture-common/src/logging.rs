//! ---
//! fx_section: "02-ambient"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Shared configuration, errors, and tracing bootstrap."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_appender::rolling::daily;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::error::Result;

static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();

/// Available log formats for console output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    StructuredJson,
    #[default]
    Pretty,
}

/// Initialize the tracing subscriber from configuration.
///
/// Console output always goes to stderr so stdout carries only command
/// output. `FIXTURE_LOG` overrides the filter, then `RUST_LOG`, defaulting
/// to `warn`. When `config.file` is set a daily rolling JSON file is added
/// under `config.directory`.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<()> {
    let file_layer = if config.file {
        std::fs::create_dir_all(&config.directory)?;
        let prefix = config
            .file_prefix
            .clone()
            .unwrap_or_else(|| service_name.to_owned());
        let appender = daily(&config.directory, format!("{}.log", prefix));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        Some(
            fmt::layer()
                .with_target(true)
                .json()
                .with_writer(writer)
                .boxed(),
        )
    } else {
        None
    };

    let console_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fixture_logging::env_filter())
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .ok();

    debug!(
        service = %service_name,
        format = ?config.format,
        file = config.file,
        "tracing initialised"
    );
    Ok(())
}
