//! ---
//! fx_section: "02-ambient"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Structured logging context and macros."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
#![warn(missing_docs)]
//! Structured logging helpers shared by the fixture tooling.

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

/// Environment variable consulted first for the log filter directive.
pub const LOG_ENV: &str = "FIXTURE_LOG";

/// Build the log filter: `FIXTURE_LOG`, then `RUST_LOG`, then `warn`.
///
/// An unparsable `FIXTURE_LOG` directive is reported on stderr and replaced
/// by `warn`.
pub fn env_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!("invalid {} directive ({}); defaulting to warn", LOG_ENV, err);
            EnvFilter::new("warn")
        }),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Initialize a baseline stderr subscriber, used when configuration is unavailable.
pub fn init() {
    let _ = Registry::default()
        .with(env_filter())
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Fixture entity the event concerns (`MyStruct`, `AnotherType`, ...).
    pub entity: Option<&'a str>,
    /// Operation being exercised.
    pub operation: Option<&'a str>,
    /// Configuration source in effect.
    pub config: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an entity name.
    pub fn with_entity(mut self, entity: &'a str) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Attach an operation name.
    pub fn with_operation(mut self, operation: &'a str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Attach the configuration source.
    pub fn with_config(mut self, config: &'a str) -> Self {
        self.config = Some(config);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let fallback = LogContext::default();
    let ctx = context.unwrap_or(&fallback);
    // `tracing::event!` needs a constant level, hence the split.
    match outcome {
        SystemEventOutcome::Success => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            entity = ctx.entity.unwrap_or(""),
            operation = ctx.operation.unwrap_or(""),
            config = ctx.config.unwrap_or(""),
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::event!(
            Level::ERROR,
            event,
            outcome = outcome.as_str(),
            entity = ctx.entity.unwrap_or(""),
            operation = ctx.operation.unwrap_or(""),
            config = ctx.config.unwrap_or(""),
            message = %message
        ),
    }
}
