// domainguard/src/commands/scan.rs
//! Scan command implementation: report every internal domain mention with its
//! offsets, without rewriting the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use domainguard_core::{ScanOutcome, ValidatorRegistry};

use crate::cli::ScanCommand;
use crate::commands::{build_domain_config, read_input};

/// Runs the `scan` command. Returns the process exit code:
/// 0 when the input passes, 1 when internal domains were found.
pub fn run_scan(args: &ScanCommand, quiet: bool) -> Result<i32> {
    info!("Starting domainguard scan.");

    let config = build_domain_config(args.config.as_ref(), &args.domains)?;
    let input = read_input(args.input_file.as_ref())?;

    let registry = ValidatorRegistry::with_internal_domains(config)?;
    let validator = registry.get("internal_domains")?;
    let outcome = validator.validate(&input)?;

    if args.json {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        serde_json::to_writer_pretty(&mut writer, &outcome)
            .context("Failed to serialize scan outcome")?;
        writeln!(writer)?;
    } else {
        print_human_outcome(&outcome, quiet)?;
    }

    info!("Scan completed.");
    Ok(if outcome.is_pass() { 0 } else { 1 })
}

fn print_human_outcome(outcome: &ScanOutcome, quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    match outcome {
        ScanOutcome::Pass => {
            if !quiet {
                if supports_color {
                    writeln!(writer, "{}", "No internal domains found.".green())?;
                } else {
                    writeln!(writer, "No internal domains found.")?;
                }
            }
        }
        ScanOutcome::Fail(failure) => {
            if supports_color {
                writeln!(writer, "{}", failure.error_message.red())?;
            } else {
                writeln!(writer, "{}", failure.error_message)?;
            }
            for span in &failure.error_spans {
                writeln!(writer, "  {}", span.reason)?;
            }
        }
    }
    Ok(())
}
