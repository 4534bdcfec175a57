// domainguard-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the scanner.
//! Each call builds (or fetches from the compile cache) a scanner for the
//! given domain list and runs a single scan.

use anyhow::Result;

use crate::config::DomainConfig;
use crate::report::ScanOutcome;
use crate::scanner::DomainScanner;

/// Scans `text` against `domains` in a single call.
///
/// This is the primary entry point for callers that do not keep a scanner
/// around between calls.
pub fn scan_string(domains: Vec<String>, text: &str) -> Result<ScanOutcome> {
    let config = DomainConfig::new(domains)?;
    let scanner = DomainScanner::new(config)?;
    Ok(scanner.scan(text))
}

/// Returns a redacted copy of `text`, or the original text unchanged when the
/// scan passes.
pub fn redact_string(domains: Vec<String>, text: &str) -> Result<String> {
    match scan_string(domains, text)? {
        ScanOutcome::Pass => Ok(text.to_string()),
        ScanOutcome::Fail(failure) => Ok(failure.fix_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_string_pass() -> Result<()> {
        let outcome = scan_string(
            vec!["internal.company.com".to_string()],
            "This is a string with no domains except a reference to https://www.example.com",
        )?;
        assert!(outcome.is_pass());
        Ok(())
    }

    #[test]
    fn test_redact_string_replaces_mention() -> Result<()> {
        let redacted = redact_string(
            vec!["internal.example.com".to_string()],
            "wiki: internal.example.com/welcome-guide",
        )?;
        assert_eq!(redacted, "wiki: **********************************");
        Ok(())
    }

    #[test]
    fn test_redact_string_passes_through_clean_text() -> Result<()> {
        let text = "no internal references here";
        let redacted = redact_string(vec!["internal.example.com".to_string()], text)?;
        assert_eq!(redacted, text);
        Ok(())
    }
}
