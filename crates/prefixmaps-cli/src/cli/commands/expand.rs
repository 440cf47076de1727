//! `prefixmaps expand` – CURIE to URI.

use anyhow::Result;
use prefixmaps_core::config::PrefixmapsConfig;

use super::source::load_go_context;
use crate::cli::SourceArgs;

pub fn run_expand(cfg: &PrefixmapsConfig, source: &SourceArgs, curie: &str) -> Result<()> {
    let ctx = load_go_context(cfg, source)?;
    match ctx.expand(curie) {
        Some(uri) => println!("{}", uri),
        None => anyhow::bail!("cannot expand {:?}: unknown prefix in context {}", curie, ctx.name()),
    }
    Ok(())
}
