//! `prefixmaps config` – show where settings live and what they are.

use anyhow::Result;
use prefixmaps_core::config::PrefixmapsConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &PrefixmapsConfig) -> Result<()> {
    print!("{}", render_config(path, cfg)?);
    Ok(())
}

pub(crate) fn render_config(path: &Path, cfg: &PrefixmapsConfig) -> Result<String> {
    Ok(format!("# {}\n{}", path.display(), toml::to_string_pretty(cfg)?))
}
