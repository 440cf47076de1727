//! CLI for prefixmaps ingestion.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use prefixmaps_core::config;
use prefixmaps_core::output::Format;
use std::path::PathBuf;

use commands::{run_config, run_contract, run_expand, run_go};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "prefixmaps")]
#[command(about = "Build prefix/namespace contexts from external registries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the registry document comes from. Defaults to the configured URL.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Fetch the registry from this URL instead of the configured one.
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the registry from a local YAML file ("-" for stdin).
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ingest GO db-xrefs.yaml and print the "go" context.
    Go {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format: csv, tsv, json or yaml.
        #[arg(long, default_value = "csv")]
        format: Format,
    },

    /// Expand a CURIE (e.g. GO:0008150) against the "go" context.
    Expand {
        curie: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Contract a URI to a CURIE using the "go" context.
    Contract {
        uri: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Go { source, format } => run_go(&cfg, &source, format)?,
            CliCommand::Expand { curie, source } => run_expand(&cfg, &source, &curie)?,
            CliCommand::Contract { uri, source } => run_contract(&cfg, &source, &uri)?,
            CliCommand::Config => run_config(&config::config_path()?, &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
