// domainguard/src/commands/sanitize.rs
//! Sanitize command implementation: rewrite the input with every internal
//! domain mention replaced by an equal-length run of asterisks.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use domainguard_core::{apply_on_fail, DomainScanner};

use crate::cli::SanitizeCommand;
use crate::commands::{build_domain_config, read_input};

/// Runs the `sanitize` command. Returns the process exit code:
/// 0 when output was produced, 1 when internal domains were found and the
/// on-fail policy was `noop` (the findings are reported but not rewritten).
pub fn run_sanitize(args: &SanitizeCommand, quiet: bool) -> Result<i32> {
    info!("Starting domainguard sanitize.");

    let config = build_domain_config(args.config.as_ref(), &args.domains)?;
    let input = read_input(args.input_file.as_ref())?;

    let scanner = DomainScanner::new(config)?;
    let outcome = scanner.scan(&input);

    debug!(
        "Scan finished. Matched spans: {}",
        outcome.failure().map_or(0, |f| f.error_spans.len())
    );

    let output_text = apply_on_fail(&outcome, &input, args.on_fail.into())?;

    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(output_text.as_bytes())?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(output_text.as_bytes())?;
        }
    }

    if let Some(failure) = outcome.failure() {
        if !quiet {
            eprintln!("{}", failure.error_message);
        }
        if matches!(args.on_fail, crate::cli::OnFailChoice::Noop) {
            return Ok(1);
        }
    }

    info!("Sanitize completed.");
    Ok(0)
}
