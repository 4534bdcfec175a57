//! Configuration management for `domainguard-core`.
//!
//! This module defines the core data structure for the internal-domain list and
//! handles serialization/deserialization of YAML configurations, along with
//! utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::DomainGuardError;

/// Maximum allowed length for a configured domain string.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Represents the ordered list of internal domains the scanner should flag.
///
/// Order matters: it defines the order in which patterns are built and applied,
/// and therefore the order of reported mentions. Duplicate entries are permitted
/// and are intentionally never deduplicated.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct DomainConfig {
    /// Internal domain literals (e.g. `internal.company.com`).
    pub domains: Vec<String>,
}

impl DomainConfig {
    /// Creates a config from an ordered list of domain strings, validating
    /// each entry's shape before scanning can begin.
    pub fn new(domains: Vec<String>) -> Result<Self, DomainGuardError> {
        validate_domains(&domains)?;
        Ok(Self { domains })
    }

    /// Loads a domain list from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading domain list from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DomainConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_domains(&config.domains)?;
        info!("Loaded {} domains from file {}.", config.domains.len(), path.display());

        Ok(config)
    }
}

/// Merges a caller-supplied domain list into a base list.
///
/// User domains are appended after the base domains, preserving the order of
/// both lists. No deduplication is performed: a domain listed twice is scanned
/// twice, which is the documented behavior of the scanner.
pub fn merge_domains(base: DomainConfig, user: Option<DomainConfig>) -> DomainConfig {
    debug!("merge_domains called. Base domain count: {}", base.domains.len());

    let mut domains = base.domains;
    if let Some(user_cfg) = user {
        debug!("User config provided. Appending {} user domains.", user_cfg.domains.len());
        domains.extend(user_cfg.domains);
    }

    debug!("Final total domains after merge: {}", domains.len());
    DomainConfig { domains }
}

/// Validates domain-list shape (emptiness, whitespace, length).
///
/// Regex metacharacters are deliberately legal here: a configured domain is
/// always matched as a literal, so characters like `+` carry no pattern
/// semantics and must not be rejected.
pub fn validate_domains(domains: &[String]) -> Result<(), DomainGuardError> {
    for (index, domain) in domains.iter().enumerate() {
        if domain.is_empty() {
            return Err(DomainGuardError::EmptyDomain(index));
        }
        if domain.chars().any(char::is_whitespace) {
            return Err(DomainGuardError::DomainContainsWhitespace(domain.clone()));
        }
        if domain.len() > MAX_DOMAIN_LENGTH {
            return Err(DomainGuardError::DomainLengthExceeded(
                domain.clone(),
                domain.len(),
                MAX_DOMAIN_LENGTH,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_domain() {
        let result = DomainConfig::new(vec!["internal.company.com".to_string(), String::new()]);
        assert!(matches!(result, Err(DomainGuardError::EmptyDomain(1))));
    }

    #[test]
    fn test_new_rejects_whitespace() {
        let result = DomainConfig::new(vec!["internal company.com".to_string()]);
        assert!(matches!(result, Err(DomainGuardError::DomainContainsWhitespace(_))));
    }

    #[test]
    fn test_new_accepts_regex_metacharacters() {
        let config = DomainConfig::new(vec!["weird+host.example.com".to_string()]).unwrap();
        assert_eq!(config.domains.len(), 1);
    }

    #[test]
    fn test_merge_preserves_order_and_duplicates() {
        let base = DomainConfig::new(vec!["a.example.com".to_string()]).unwrap();
        let user = DomainConfig::new(vec![
            "b.example.com".to_string(),
            "a.example.com".to_string(),
        ])
        .unwrap();
        let merged = merge_domains(base, Some(user));
        assert_eq!(
            merged.domains,
            vec!["a.example.com", "b.example.com", "a.example.com"]
        );
    }
}
