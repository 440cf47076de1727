//! Resolve `--url` / `--file` / config into a loaded "go" context.

use anyhow::{Context as _, Result};
use prefixmaps_core::config::{self, PrefixmapsConfig};
use prefixmaps_core::ingest::go;
use prefixmaps_core::Context;
use std::fs::File;
use std::io;

use crate::cli::SourceArgs;

pub fn load_go_context(cfg: &PrefixmapsConfig, source: &SourceArgs) -> Result<Context> {
    if let Some(path) = &source.file {
        if path.as_os_str() == "-" {
            tracing::info!("reading GO db-xrefs from stdin");
            return Ok(go::parse_go_xrefs_reader(io::stdin().lock())?);
        }
        tracing::info!("reading GO db-xrefs from {}", path.display());
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        return go::parse_go_xrefs_reader(file)
            .with_context(|| format!("ingest {}", path.display()));
    }

    let url = match source.url.as_deref() {
        Some(url) => {
            config::validate_source_url(url).context("--url")?;
            url
        }
        None => cfg.go_source_url.as_str(),
    };
    go::parse_go_xrefs_from_remote(url, &cfg.fetch_options())
        .with_context(|| format!("ingest {}", url))
}
