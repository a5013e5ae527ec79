//! ---
//! fx_section: "03-cli"
//! fx_subsection: "binary"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Control CLI exercising the fixture declarations."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use fixture_logging::{log_system_event, LogContext, SystemEventOutcome};
use fixture_model::SymbolCatalog;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Args)]
pub struct SymbolsCommand {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Omit non-public symbols.
    #[arg(long)]
    public_only: bool,
}

impl SymbolsCommand {
    pub fn execute(self) -> Result<()> {
        let mut catalog = SymbolCatalog::fixture();
        if self.public_only {
            catalog = catalog.public_only();
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render(&catalog, self.format, &mut out).context("failed to write symbol catalogue")?;
        log_system_event(
            Some(&LogContext::new().with_operation("symbols")),
            "symbols.render",
            &format!("rendered {} symbols", catalog.len()),
            SystemEventOutcome::Success,
        );
        Ok(())
    }
}

fn render<W: Write>(catalog: &SymbolCatalog, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for symbol in catalog {
                let visibility = if symbol.public { "pub" } else { "priv" };
                writeln!(
                    out,
                    "{:<9}{:<5}{}",
                    symbol.kind.to_string(),
                    visibility,
                    symbol.qualified_name()
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, catalog)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, catalog)?,
    }
    Ok(())
}
