//! `prefixmaps go` – ingest GO db-xrefs and print the context.

use anyhow::Result;
use prefixmaps_core::config::PrefixmapsConfig;
use prefixmaps_core::output::{self, Format};
use std::io::Write;

use super::source::load_go_context;
use crate::cli::SourceArgs;

pub fn run_go(cfg: &PrefixmapsConfig, source: &SourceArgs, format: Format) -> Result<()> {
    let ctx = load_go_context(cfg, source)?;
    tracing::info!("context {} has {} prefixes", ctx.name(), ctx.len());
    let rendered = output::render(&ctx, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
