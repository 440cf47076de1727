//! CLI parse and handler tests.

use super::{Cli, CliCommand, SourceArgs};
use clap::Parser;
use std::io::Write;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

/// Temp registry file plus a `--file` source pointing at it.
pub(super) fn registry_source(yaml: &str) -> (tempfile::NamedTempFile, SourceArgs) {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(yaml.as_bytes()).unwrap();
    f.flush().unwrap();
    let source = SourceArgs {
        url: None,
        file: Some(f.path().to_path_buf()),
    };
    (f, source)
}
