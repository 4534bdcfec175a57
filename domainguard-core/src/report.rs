// domainguard-core/src/report.rs
//! Provides core data structures and utility functions for reporting scan
//! outcomes and for PII-safe debug logging within the `domainguard-core` library.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Whether matched mentions may appear verbatim in debug logs.
/// Initialized once from the environment.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("DOMAINGUARD_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single detected occurrence of a configured domain.
///
/// `start` and `end` are byte offsets into the original text, end exclusive,
/// and `text[start..end]` equals `mention`. The mention may be a bare domain
/// or a full URI containing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DomainMatch {
    /// The configured domain that triggered this match.
    pub domain: String,
    /// The literal matched substring.
    pub mention: String,
    pub start: usize,
    pub end: usize,
}

/// A located mention with a human-readable reason, as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpan {
    pub start: usize,
    pub end: usize,
    pub reason: String,
}

impl ErrorSpan {
    /// Builds the span record for a match, with the canonical reason string.
    pub fn for_offsets(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            reason: format!("Internal domain detected in {}:{}", start, end),
        }
    }
}

/// The failure payload of a scan: what was found, where, and a redacted copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    /// `"Found internal domains: "` followed by the mentions joined with `", "`.
    pub error_message: String,
    /// The input with every mention replaced by an equal-length `*` run.
    pub fix_value: String,
    /// Span records in match-collection order.
    pub error_spans: Vec<ErrorSpan>,
}

/// The outcome of scanning one text against one domain list.
///
/// A scan outcome is a domain result, not an error: finding internal domains
/// is the scanner doing its job. Configuration problems surface as
/// [`crate::errors::DomainGuardError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    Pass,
    Fail(ScanFailure),
}

impl ScanOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, ScanOutcome::Pass)
    }

    /// Returns the failure payload, if any.
    pub fn failure(&self) -> Option<&ScanFailure> {
        match self {
            ScanOutcome::Pass => None,
            ScanOutcome::Fail(failure) => Some(failure),
        }
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_domain_match_debug(module_path: &str, domain: &str, mention: &str) {
    debug!(
        "{} Found DomainMatch: Domain='{}', Mention='{}'",
        module_path,
        domain,
        get_loggable_content(mention)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_error_span_reason_format() {
        let span = ErrorSpan::for_offsets(4, 27);
        assert_eq!(span.reason, "Internal domain detected in 4:27");
    }

    #[test]
    fn test_scan_outcome_serializes_with_tag() {
        let outcome = ScanOutcome::Pass;
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outcome":"pass"}"#);
    }
}
