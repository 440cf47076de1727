//! Ingesters: turn an external prefix registry into a `Context`.

pub mod go;
mod record;

pub use record::XrefRecord;

/// Characters a namespace may already end with; anything else gets `/`.
pub const NAMESPACE_TERMINATORS: [char; 3] = ['/', '#', '_'];

/// Append `/` unless `ns` already ends in `/`, `#` or `_`.
///
/// An empty string is returned unchanged; callers decide whether that is an error.
pub fn normalize_namespace(ns: &str) -> String {
    match ns.chars().last() {
        None => String::new(),
        Some(c) if NAMESPACE_TERMINATORS.contains(&c) => ns.to_string(),
        Some(_) => format!("{}/", ns),
    }
}
