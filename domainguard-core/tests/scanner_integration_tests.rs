// domainguard-core/tests/scanner_integration_tests.rs
//! End-to-end tests for the `DomainScanner` against realistic inputs: bare and
//! URI-embedded mentions, span bookkeeping, redaction invariants, and literal
//! matching of domains containing regex metacharacters.

use anyhow::Result;

use domainguard_core::{
    scan_string, DomainConfig, DomainScanner, ScanOutcome,
};

fn scanner(domains: &[&str]) -> DomainScanner {
    let config = DomainConfig::new(domains.iter().map(|s| s.to_string()).collect()).unwrap();
    DomainScanner::new(config).unwrap()
}

#[test]
fn test_clean_text_passes() -> Result<()> {
    let outcome = scan_string(
        vec!["internal.company.com".to_string()],
        "This is a string with no domains except a reference to https://www.example.com",
    )?;
    assert!(outcome.is_pass());
    Ok(())
}

#[test]
fn test_two_domains_in_markdown_links() {
    let text = "You can access it [here](https://kb.internal.company.com/api/v1/articles). \
                You can learn more about projects [here](https://project-x.company.com/api/v1/articles).";
    let s = scanner(&["internal.company.com", "project-x.company.com"]);

    let outcome = s.scan(text);
    let failure = outcome.failure().expect("expected a failing scan");

    assert_eq!(
        failure.error_message,
        "Found internal domains: https://kb.internal.company.com/api/v1/articles, \
         https://project-x.company.com/api/v1/articles"
    );

    // Each URI is replaced by an equal-length asterisk run; nothing else moves.
    let expected = text
        .replace(
            "https://kb.internal.company.com/api/v1/articles",
            &"*".repeat(47),
        )
        .replace(
            "https://project-x.company.com/api/v1/articles",
            &"*".repeat(45),
        );
    assert_eq!(failure.fix_value, expected);
    assert_eq!(failure.error_spans.len(), 2);
}

#[test]
fn test_uri_mention_includes_path_suffix() {
    let s = scanner(&["internal.example.com"]);
    let text = "This string includes a link to https://internal.example.com/wiki/welcome-guide";

    let outcome = s.scan(text);
    let failure = outcome.failure().expect("expected a failing scan");
    assert!(failure
        .error_message
        .contains("https://internal.example.com/wiki/welcome-guide"));
}

#[test_log::test]
fn test_bare_mention_is_detected() {
    let s = scanner(&["internal.example.com"]);
    let outcome = s.scan("ping internal.example.com from the jump host");
    assert!(!outcome.is_pass());
}

#[test]
fn test_spans_index_the_original_text() {
    let s = scanner(&["internal.example.com"]);
    let text = "a internal.example.com b https://x.internal.example.com/p c";

    let matches = s.find_matches(text);
    assert_eq!(matches.len(), 2);
    for m in &matches {
        assert!(m.start <= m.end && m.end <= text.len());
        assert_eq!(&text[m.start..m.end], m.mention);
    }

    let failure = s.scan(text).failure().cloned().unwrap();
    for (span, m) in failure.error_spans.iter().zip(&matches) {
        assert_eq!((span.start, span.end), (m.start, m.end));
        assert_eq!(
            span.reason,
            format!("Internal domain detected in {}:{}", m.start, m.end)
        );
    }
}

#[test]
fn test_redaction_preserves_length_and_untouched_text() {
    let s = scanner(&["internal.example.com"]);
    let text = "before internal.example.com/a-b after";

    let failure = s.scan(text).failure().cloned().unwrap();
    assert_eq!(failure.fix_value.chars().count(), text.chars().count());

    let covered: Vec<(usize, usize)> = failure
        .error_spans
        .iter()
        .map(|sp| (sp.start, sp.end))
        .collect();
    for (i, (orig, red)) in text.bytes().zip(failure.fix_value.bytes()).enumerate() {
        let in_span = covered.iter().any(|&(s0, e0)| i >= s0 && i < e0);
        if in_span {
            assert_eq!(red, b'*', "byte {} inside a span must be redacted", i);
        } else {
            assert_eq!(red, orig, "byte {} outside all spans must be unchanged", i);
        }
    }
}

#[test]
fn test_rescanning_redacted_text_passes() -> Result<()> {
    let domains = vec![
        "internal.company.com".to_string(),
        "project-x.company.com".to_string(),
    ];
    let text = "See https://kb.internal.company.com/api and project-x.company.com/docs.";

    let failure = match scan_string(domains.clone(), text)? {
        ScanOutcome::Fail(f) => f,
        ScanOutcome::Pass => panic!("expected a failing scan"),
    };

    let rescan = scan_string(domains, &failure.fix_value)?;
    assert!(rescan.is_pass());
    Ok(())
}

#[test]
fn test_empty_domain_list_always_passes() -> Result<()> {
    let outcome = scan_string(vec![], "mentions of anything.example.com go unflagged")?;
    assert!(outcome.is_pass());
    Ok(())
}

#[test]
fn test_metacharacter_domain_matches_only_literally() {
    let s = scanner(&["weird+host.example.com"]);

    // If '+' leaked into the pattern as a quantifier this text would match.
    assert!(s.scan("visit weirddddhost.example.com today").is_pass());

    let outcome = s.scan("visit weird+host.example.com today");
    assert!(!outcome.is_pass());
}

#[test]
fn test_duplicate_domain_entries_report_each_pass() {
    // Duplicates are not deduplicated: the same mention is collected once per
    // configured entry, and sequential redaction stays idempotent.
    let s = scanner(&["internal.example.com", "internal.example.com"]);
    let text = "at internal.example.com now";

    let failure = s.scan(text).failure().cloned().unwrap();
    assert_eq!(failure.error_spans.len(), 2);
    assert_eq!(
        failure.error_message,
        "Found internal domains: internal.example.com, internal.example.com"
    );
    assert_eq!(failure.fix_value, "at ******************** now");
}

#[test]
fn test_overlapping_domain_configuration_records_both() {
    let s = scanner(&["kb.internal.example.com", "internal.example.com"]);
    let text = "docs at kb.internal.example.com tonight";

    let failure = s.scan(text).failure().cloned().unwrap();
    assert_eq!(failure.error_spans.len(), 2);
    // The longer mention is asterisked first, which also consumes the shorter
    // one; the second replacement pass finds nothing left to replace.
    assert_eq!(failure.fix_value, "docs at *********************** tonight");
}

#[test]
fn test_query_strings_are_not_swallowed() {
    let s = scanner(&["internal.example.com"]);
    let text = "https://internal.example.com/search?q=secret";

    let matches = s.find_matches(text);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].mention, "https://internal.example.com/search");
}
