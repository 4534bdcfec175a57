// domainguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the domainguard
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "domainguard",
    author = "DomainGuard Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and redact internal domain mentions in text",
    long_about = "Domainguard scans free-form text for mentions of a configured set of internal \
domain names, bare or embedded in http(s) URIs, and either reports every mention with its \
character offsets or rewrites the text with each mention replaced by an equal-length run of \
asterisks.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `domainguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans an input for internal domain mentions and reports each match
    /// with its offsets, without rewriting the text.
    #[command(about = "Scans an input and reports every internal domain mention with its offsets.")]
    Scan(ScanCommand),

    /// Sanitizes an input, replacing every internal domain mention with
    /// an equal-length run of asterisks.
    #[command(about = "Sanitizes an input, redacting every internal domain mention.")]
    Sanitize(SanitizeCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Internal domains to flag (repeatable).
    #[arg(long = "domain", short = 'D', value_name = "DOMAIN", help = "An internal domain to flag. May be given multiple times.")]
    pub domains: Vec<String>,

    /// Path to a YAML file listing internal domains.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML domain-list configuration file.")]
    pub config: Option<PathBuf>,

    /// Emit the scan outcome as JSON instead of human-readable text.
    #[arg(long = "json", help = "Emit the scan outcome as JSON.")]
    pub json: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Internal domains to flag (repeatable).
    #[arg(long = "domain", short = 'D', value_name = "DOMAIN", help = "An internal domain to flag. May be given multiple times.")]
    pub domains: Vec<String>,

    /// Path to a YAML file listing internal domains.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML domain-list configuration file.")]
    pub config: Option<PathBuf>,

    /// What to do when internal domains are found.
    #[arg(long = "on-fail", value_enum, default_value = "fix", help = "Policy applied when internal domains are found.")]
    pub on_fail: OnFailChoice,
}

/// CLI-facing selector for the core on-fail policy.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnFailChoice {
    /// Keep the original text and report the findings.
    Noop,
    /// Substitute the redacted copy for the original text.
    Fix,
    /// Fail the run with the scan's error message.
    Raise,
}

impl From<OnFailChoice> for domainguard_core::OnFail {
    fn from(choice: OnFailChoice) -> Self {
        match choice {
            OnFailChoice::Noop => domainguard_core::OnFail::Noop,
            OnFailChoice::Fix => domainguard_core::OnFail::Fix,
            OnFailChoice::Raise => domainguard_core::OnFail::Raise,
        }
    }
}
