//! ---
//! fx_section: "02-ambient"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Shared configuration, errors, and tracing bootstrap."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
//! Shared primitives for the fixture workspace: configuration loading,
//! error types, and the tracing subscriber bootstrap used by the CLI.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{DefaultsConfig, FixtureConfig, LoadedFixtureConfig, LoggingConfig};
pub use error::{ConfigError, Result};
pub use logging::{init_tracing, LogFormat};
