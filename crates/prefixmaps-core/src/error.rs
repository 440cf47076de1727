//! Error type for fetching and transforming prefix registries.
//!
//! Library entry points return `IngestError` so callers can tell a network
//! failure from a bad document. Application layers wrap it in `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Curl reported a transport error (DNS, connection refused, timeout).
    #[error("fetching {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// Response body was not valid UTF-8.
    #[error("response from {url} is not valid UTF-8")]
    Encoding {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Document is not YAML, or not a sequence of mappings.
    #[error("malformed registry document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A record that carries `rdf_uri_prefix` has no `database`.
    #[error("record {index} has rdf_uri_prefix but no `{field}` key")]
    MissingField { index: usize, field: &'static str },

    /// A record that carries `rdf_uri_prefix` has a `database` that is not a string.
    #[error("record {index} has a non-string `{field}`")]
    InvalidField { index: usize, field: &'static str },

    /// `rdf_uri_prefix` is present but null or empty.
    #[error("record for {database} has an empty rdf_uri_prefix")]
    EmptyNamespace { database: String },

    /// Reading a local input failed.
    #[error("reading registry input: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// True for failures of the transport or the server, as opposed to the document.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            IngestError::Network { .. } | IngestError::HttpStatus { .. } | IngestError::Encoding { .. }
        )
    }
}
