//! Named prefix contexts.
//!
//! A `Context` holds the prefix -> namespace expansions contributed by one
//! source (e.g. "go"). Entries keep insertion order; re-adding a prefix
//! replaces its namespace in place.

use serde::Serialize;
use std::collections::HashMap;

/// One prefix and the namespace it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixExpansion {
    pub prefix: String,
    pub namespace: String,
}

/// Ordered, named prefix map.
#[derive(Debug, Clone, Default)]
pub struct Context {
    name: String,
    expansions: Vec<PrefixExpansion>,
    /// prefix -> position in `expansions`.
    index: HashMap<String, usize>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expansions: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `prefix -> namespace`. A prefix seen before keeps its position
    /// and takes the new namespace.
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if let Some(&pos) = self.index.get(&prefix) {
            let existing = &mut self.expansions[pos];
            if existing.namespace != namespace {
                tracing::debug!(
                    context = %self.name,
                    prefix = %prefix,
                    old = %existing.namespace,
                    new = %namespace,
                    "replacing namespace for existing prefix"
                );
            }
            existing.namespace = namespace;
            return;
        }
        self.index.insert(prefix.clone(), self.expansions.len());
        self.expansions.push(PrefixExpansion { prefix, namespace });
    }

    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }

    /// Namespace for `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.index
            .get(prefix)
            .map(|&pos| self.expansions[pos].namespace.as_str())
    }

    /// First prefix (in insertion order) that maps to `namespace`.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.expansions
            .iter()
            .find(|e| e.namespace == namespace)
            .map(|e| e.prefix.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixExpansion> {
        self.expansions.iter()
    }

    /// prefix -> namespace.
    pub fn as_map(&self) -> HashMap<&str, &str> {
        self.expansions
            .iter()
            .map(|e| (e.prefix.as_str(), e.namespace.as_str()))
            .collect()
    }

    /// namespace -> prefix. When several prefixes share a namespace the
    /// earliest one wins.
    pub fn as_inverted_map(&self) -> HashMap<&str, &str> {
        let mut out = HashMap::new();
        for e in &self.expansions {
            out.entry(e.namespace.as_str()).or_insert(e.prefix.as_str());
        }
        out
    }

    /// Expand `PREFIX:local` to a full URI. Returns `None` for a string with
    /// no colon or an unknown prefix.
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.get(prefix).map(|ns| format!("{}{}", ns, local))
    }

    /// Contract a URI to `PREFIX:local` using the longest matching namespace.
    pub fn contract(&self, uri: &str) -> Option<String> {
        self.expansions
            .iter()
            .filter(|e| uri.starts_with(e.namespace.as_str()))
            .max_by_key(|e| e.namespace.len())
            .map(|e| format!("{}:{}", e.prefix, &uri[e.namespace.len()..]))
    }
}
