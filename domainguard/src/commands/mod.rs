// domainguard/src/commands/mod.rs
//! Command implementations for the `domainguard` CLI.

pub mod sanitize;
pub mod scan;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use domainguard_core::{merge_domains, DomainConfig};

/// Reads the text to scan from a file, or from stdin when no file is given.
pub fn read_input(input_file: Option<&PathBuf>) -> Result<String> {
    match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the domain list from an optional YAML config plus `-D` flags.
///
/// Config-file domains come first, command-line domains after, preserving the
/// order in which each was given.
pub fn build_domain_config(
    config_path: Option<&PathBuf>,
    cli_domains: &[String],
) -> Result<DomainConfig> {
    let base = match config_path {
        Some(path) => DomainConfig::load_from_file(path)?,
        None => DomainConfig::default(),
    };
    let user = if cli_domains.is_empty() {
        None
    } else {
        Some(DomainConfig::new(cli_domains.to_vec())?)
    };
    Ok(merge_domains(base, user))
}
