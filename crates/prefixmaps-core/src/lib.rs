pub mod config;
pub mod logging;

pub mod context;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod output;

pub use context::{Context, PrefixExpansion};
pub use error::IngestError;
