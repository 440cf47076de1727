//! Gene Ontology `db-xrefs.yaml` ingester.
//!
//! Each registry entry with an `rdf_uri_prefix` contributes
//! `database -> rdf_uri_prefix` to the "go" context; entries without one are
//! skipped.

use std::io::Read;

use super::{normalize_namespace, XrefRecord};
use crate::context::Context;
use crate::error::IngestError;
use crate::fetch::{self, FetchOptions};

pub const GO_XREFS_URL: &str =
    "https://raw.githubusercontent.com/geneontology/go-site/master/metadata/db-xrefs.yaml";

/// Name of the context this ingester builds.
pub const CONTEXT_NAME: &str = "go";

/// Fetch the registry at `url` and convert it.
pub fn parse_go_xrefs_from_remote(url: &str, opts: &FetchOptions) -> Result<Context, IngestError> {
    let text = fetch::fetch_text(url, opts)?;
    parse_go_xrefs(&text)
}

/// Convert registry YAML read from `reader` (a file, stdin, ...).
pub fn parse_go_xrefs_reader<R: Read>(mut reader: R) -> Result<Context, IngestError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_go_xrefs(&text)
}

/// Convert registry YAML text into the "go" context.
///
/// The document must be a non-empty sequence of mappings. A record carrying
/// `rdf_uri_prefix` needs a string `database` and a non-empty prefix; records
/// without the key are skipped whatever else they hold.
pub fn parse_go_xrefs(text: &str) -> Result<Context, IngestError> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
    if doc.is_null() {
        return Err(IngestError::Parse(serde::de::Error::custom(
            "registry document is empty",
        )));
    }
    let records: Vec<XrefRecord> = serde_yaml::from_value(doc)?;
    let mut context = Context::new(CONTEXT_NAME);
    let mut skipped = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        let Some(raw_ns) = &record.rdf_uri_prefix else {
            tracing::trace!(index, database = ?record.database, "no rdf_uri_prefix, skipping");
            skipped += 1;
            continue;
        };
        let database = match record.database_str() {
            Some(db) => db,
            None if record.database.is_none() => {
                return Err(IngestError::MissingField {
                    index,
                    field: "database",
                })
            }
            None => {
                return Err(IngestError::InvalidField {
                    index,
                    field: "database",
                })
            }
        };
        let raw_ns = match raw_ns.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => {
                return Err(IngestError::EmptyNamespace {
                    database: database.to_string(),
                })
            }
        };
        context.add_prefix(database, normalize_namespace(raw_ns));
    }

    tracing::debug!(
        context = CONTEXT_NAME,
        prefixes = context.len(),
        skipped,
        "parsed GO db-xrefs"
    );
    Ok(context)
}
