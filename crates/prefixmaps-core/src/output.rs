//! Render a context for printing: CSV/TSV rows or a JSON/YAML prefix map.

use anyhow::{Context as _, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Csv,
    Tsv,
    Json,
    Yaml,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(format!("unknown format {:?} (csv, tsv, json, yaml)", other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Json => "json",
            Format::Yaml => "yaml",
        };
        f.write_str(s)
    }
}

/// Serializes as a map in insertion order (serde_json's Map would sort).
struct OrderedPrefixMap<'a>(&'a Context);

impl Serialize for OrderedPrefixMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|e| (&e.prefix, &e.namespace)))
    }
}

fn render_delimited(ctx: &Context, delimiter: u8) -> Result<String> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    w.write_record(["context", "prefix", "namespace"])?;
    for e in ctx.iter() {
        w.write_record([ctx.name(), e.prefix.as_str(), e.namespace.as_str()])?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flush {} rows: {}", ctx.name(), e))?;
    String::from_utf8(bytes).context("delimited output is not UTF-8")
}

pub fn render(ctx: &Context, format: Format) -> Result<String> {
    match format {
        Format::Csv => render_delimited(ctx, b','),
        Format::Tsv => render_delimited(ctx, b'\t'),
        Format::Json => {
            let mut s = serde_json::to_string_pretty(&OrderedPrefixMap(ctx))?;
            s.push('\n');
            Ok(s)
        }
        Format::Yaml => Ok(serde_yaml::to_string(&OrderedPrefixMap(ctx))?),
    }
}
