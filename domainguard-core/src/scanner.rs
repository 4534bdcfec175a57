// domainguard-core/src/scanner.rs
//! The `DomainScanner`: detection and redaction of internal-domain mentions.
//!
//! Scanning iterates the configured domains in order and collects every
//! non-overlapping, left-to-right match of each domain's pattern. Matches from
//! different domains are recorded independently, never merged or deduplicated.
//! Redaction then replaces each collected mention, as a literal substring of
//! the working text, with a `*` run of equal length.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;

use crate::config::DomainConfig;
use crate::patterns::{get_or_compile_patterns, CompiledPatterns};
use crate::report::{log_domain_match_debug, DomainMatch, ErrorSpan, ScanFailure, ScanOutcome};

/// Scans free-form text for mentions of a configured set of internal domains.
///
/// A scanner is immutable once constructed and holds no per-call state: `scan`
/// is a pure function of its input, safe to invoke concurrently from multiple
/// callers without locking.
#[derive(Debug)]
pub struct DomainScanner {
    compiled: Arc<CompiledPatterns>,
    config: DomainConfig,
}

impl DomainScanner {
    /// Builds a scanner for the given domain list.
    ///
    /// Domain-list shape is validated and every pattern is compiled here, so
    /// configuration errors surface before any text is scanned.
    pub fn new(config: DomainConfig) -> Result<Self> {
        let compiled = get_or_compile_patterns(&config)
            .context("Failed to compile domain patterns for DomainScanner")?;

        Ok(Self { compiled, config })
    }

    /// Returns the domain list this scanner was built from.
    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Collects every mention of every configured domain in `text`.
    ///
    /// Results are ordered by domain-iteration order first, then by order of
    /// appearance within each domain's scan. Overlapping matches from distinct
    /// domains are all recorded.
    pub fn find_matches(&self, text: &str) -> Vec<DomainMatch> {
        let mut matches = Vec::new();

        for pattern in &self.compiled.patterns {
            for m in pattern.regex.find_iter(text) {
                log_domain_match_debug(module_path!(), &pattern.domain, m.as_str());
                matches.push(DomainMatch {
                    domain: pattern.domain.clone(),
                    mention: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                });
            }
        }

        matches
    }

    /// Replaces every occurrence of each mention with a `*` run of equal
    /// character length, processing mentions in collection order.
    ///
    /// Replacement is literal-substring based, not offset based: once a
    /// mention has been asterisked, a later identical mention in the list is
    /// a no-op because the substring no longer appears. Collection order must
    /// be preserved when mentions are prefixes or suffixes of one another.
    pub fn redact(&self, text: &str, matches: &[DomainMatch]) -> String {
        let mut redacted = text.to_string();
        for m in matches {
            let stars = "*".repeat(m.mention.chars().count());
            redacted = redacted.replace(&m.mention, &stars);
        }
        redacted
    }

    /// Scans `text` and produces a pass/fail outcome.
    ///
    /// Pass when nothing matched; otherwise Fail carrying the joined mention
    /// list, a fully redacted copy of the text, and one span per match.
    pub fn scan(&self, text: &str) -> ScanOutcome {
        if text.is_empty() || self.config.domains.is_empty() {
            return ScanOutcome::Pass;
        }

        let matches = self.find_matches(text);
        if matches.is_empty() {
            return ScanOutcome::Pass;
        }

        debug!("Scan found {} internal domain mention(s).", matches.len());

        let mentions: Vec<&str> = matches.iter().map(|m| m.mention.as_str()).collect();
        let error_spans: Vec<ErrorSpan> = matches
            .iter()
            .map(|m| ErrorSpan::for_offsets(m.start, m.end))
            .collect();

        ScanOutcome::Fail(ScanFailure {
            error_message: format!("Found internal domains: {}", mentions.join(", ")),
            fix_value: self.redact(text, &matches),
            error_spans,
        })
    }
}
