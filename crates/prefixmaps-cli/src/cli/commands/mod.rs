//! CLI command handlers. Each command is in its own file.

pub(super) mod config;
mod contract;
mod expand;
mod go;
pub(super) mod source;

pub use config::run_config;
pub use contract::run_contract;
pub use expand::run_expand;
pub use go::run_go;
