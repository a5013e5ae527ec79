//! ---
//! fx_section: "03-cli"
//! fx_subsection: "binary"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Control CLI exercising the fixture declarations."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixture_common::config::DEFAULT_CANDIDATES;
use fixture_common::FixtureConfig;
use fixture_logging::{
    self as logging, fx_debug, log_system_event, LogContext, SystemEventOutcome,
};
use fixture_model::FixtureFunction;

mod fixture;
mod symbols;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Fixture control utility",
    long_about = None
)]
struct Cli {
    /// Configuration file (overrides FIXTURE_CONFIG and the default search path).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the top-level function line.
    #[command(name = "top-level")]
    TopLevel,
    /// Print the another-function line.
    Another,
    /// Print the public-function line.
    Public,
    /// Invoke the arrow closure.
    Arrow,
    /// Print the value returned by the exported function.
    Exported,
    /// Call AnotherClass::only_method.
    Only,
    /// Build a MyStruct (or MyClass), optionally write it, and print its value.
    Value(fixture::ValueCommand),
    /// Build an AnotherType and print its name.
    Name(fixture::NameCommand),
    /// Print the catalogue of declared fixture symbols.
    Symbols(symbols::SymbolsCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match FixtureConfig::load_with_source(cli.config.as_deref(), &DEFAULT_CANDIDATES)
    {
        Ok(loaded) => loaded,
        Err(err) => {
            // No usable logging section, fall back to the baseline subscriber.
            logging::init();
            log_system_event(
                None,
                "config.load",
                &err.to_string(),
                SystemEventOutcome::Fault,
            );
            return Err(err).context("failed to load configuration");
        }
    };
    fixture_common::init_tracing("fixturectl", &loaded.config.logging)
        .context("failed to initialise tracing")?;

    let source = loaded
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_owned());
    fx_debug!(
        context = LogContext::new().with_config(&source),
        "configuration resolved"
    );

    let config = &loaded.config;
    match cli.command {
        Commands::TopLevel => fixture::call(FixtureFunction::TopLevelFunction),
        Commands::Another => fixture::call(FixtureFunction::AnotherFunction),
        Commands::Public => fixture::call(FixtureFunction::PublicFunction),
        Commands::Arrow => fixture::call(FixtureFunction::ArrowFunc),
        Commands::Exported => fixture::exported(),
        Commands::Only => fixture::only(),
        Commands::Value(cmd) => cmd.execute(config),
        Commands::Name(cmd) => cmd.execute(config),
        Commands::Symbols(cmd) => cmd.execute(),
    }
}
