//! `prefixmaps contract` – URI to CURIE.

use anyhow::Result;
use prefixmaps_core::config::PrefixmapsConfig;

use super::source::load_go_context;
use crate::cli::SourceArgs;

pub fn run_contract(cfg: &PrefixmapsConfig, source: &SourceArgs, uri: &str) -> Result<()> {
    let ctx = load_go_context(cfg, source)?;
    let Some(curie) = ctx.contract(uri) else {
        anyhow::bail!("no namespace in context {} matches {}", ctx.name(), uri);
    };
    println!("{}", curie);
    Ok(())
}
