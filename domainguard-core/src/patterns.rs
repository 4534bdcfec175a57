//! patterns.rs - Manages the construction, compilation and caching of domain patterns.
//!
//! This module converts a `DomainConfig` into `CompiledPatterns` optimized for
//! scanning. It uses a global, shared cache keyed on the ordered domain list to
//! avoid redundant compilation across scanner instances.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{validate_domains, DomainConfig};
use crate::errors::DomainGuardError;

/// A single compiled domain matcher.
///
/// The regex is an alternation of two shapes, URI form first so it is preferred
/// when both could apply at the same position:
/// 1. `http(s)://` + optional `word.` subdomain labels + the literal domain +
///    an optional slash-delimited path of word characters and hyphens;
/// 2. the bare literal domain + the same optional path.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The domain literal this pattern was built from.
    pub domain: String,
    /// The compiled matcher for bare and URI-embedded mentions.
    pub regex: Regex,
}

/// All compiled patterns for a domain list, in configured order.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub patterns: Vec<CompiledPattern>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled patterns.
    /// The key is a hash of the ordered domain list.
    static ref COMPILED_PATTERNS_CACHE: RwLock<HashMap<u64, Arc<CompiledPatterns>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the ordered domain list to create a stable cache key.
///
/// The list is hashed as-is: order and duplicates are significant, so
/// `["a", "b"]` and `["b", "a"]` produce distinct keys.
fn hash_config(config: &DomainConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.domains.hash(&mut hasher);
    hasher.finish()
}

/// Builds the pattern source for one configured domain.
///
/// Every regex metacharacter in the domain is escaped, so dots are literal dots
/// and a `+` in a domain never becomes a quantifier.
pub fn build_domain_pattern(domain: &str) -> String {
    let escaped = regex::escape(domain);
    format!(r"https?://(?:\w+\.)*{escaped}(?:/[\w\-/]*)?|{escaped}(?:/[\w\-/]*)?")
}

/// Compiles a domain list into `CompiledPatterns` for efficient scanning.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_patterns(domains: &[String]) -> Result<CompiledPatterns, DomainGuardError> {
    debug!("Starting compilation of {} domain patterns.", domains.len());

    validate_domains(domains)?;

    let mut patterns = Vec::with_capacity(domains.len());
    for domain in domains {
        let source = build_domain_pattern(domain);
        debug!("Compiling pattern for domain '{}'", domain);

        let regex = RegexBuilder::new(&source)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build()
            .map_err(|e| DomainGuardError::PatternCompilationError(domain.clone(), e))?;

        patterns.push(CompiledPattern {
            domain: domain.clone(),
            regex,
        });
    }

    debug!("Finished compiling patterns. Total compiled: {}.", patterns.len());
    Ok(CompiledPatterns { patterns })
}

/// Gets a `CompiledPatterns` instance from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving compiled patterns. It returns
/// an `Arc` to a `CompiledPatterns` instance, allowing for cheap sharing.
pub fn get_or_compile_patterns(config: &DomainConfig) -> Result<Arc<CompiledPatterns>> {
    let cache_key = hash_config(config);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_PATTERNS_CACHE.read().unwrap();
        if let Some(patterns) = cache.get(&cache_key) {
            debug!("Serving compiled patterns from cache for key: {}", &cache_key);
            return Ok(Arc::clone(patterns));
        }
    } // Read lock is released here.

    debug!("Compiled patterns not found in cache. Compiling now.");
    let compiled = compile_patterns(&config.domains)?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_PATTERNS_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached patterns for key: {}", &cache_key);
    Ok(compiled_arc)
}
