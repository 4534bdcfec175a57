// domainguard-core/src/lib.rs
//! # DomainGuard Core Library
//!
//! `domainguard-core` provides the fundamental, platform-independent logic for
//! detecting and redacting mentions of internal domain names in free-form text.
//! It defines the data structures for domain configuration and scan outcomes,
//! compiles per-domain matchers, and implements the `DomainScanner` plus a
//! pluggable `Validator` trait for host validation pipelines.
//!
//! The library is designed to be pure and stateless: a scan is a function of
//! (text, domain list) alone, with no I/O and no state shared between calls.
//!
//! ## Modules
//!
//! * `config`: Defines `DomainConfig` for specifying the internal-domain list.
//! * `patterns`: Builds, compiles, and caches the per-domain matchers.
//! * `report`: Defines `DomainMatch`, `ErrorSpan`, and the `ScanOutcome` result.
//! * `scanner`: The `DomainScanner`: detection, span collection, and redaction.
//! * `engine`: The `Validator` trait and the explicit `OnFail` policy.
//! * `registry`: A simple name-to-validator mapping for host integration.
//! * `headless`: Convenience wrappers for one-shot scanning.
//!
//! ## Usage Example
//!
//! ```rust
//! use domainguard_core::{scan_string, ScanOutcome};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let domains = vec!["internal.example.com".to_string()];
//!     let text = "This string includes a link to https://internal.example.com/wiki/welcome-guide";
//!
//!     match scan_string(domains, text)? {
//!         ScanOutcome::Pass => println!("No internal domains found."),
//!         ScanOutcome::Fail(failure) => {
//!             println!("{}", failure.error_message);
//!             println!("Redacted: {}", failure.fix_value);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations at the boundary and
//! defines the structured `DomainGuardError` for programmatic handling. A scan
//! that finds internal domains is a `ScanOutcome::Fail`, never an error.
//!
//! ## Design Principles
//!
//! * **Pluggable:** The `Validator` trait lets hosts register scanners by name
//!   and invoke them interchangeably.
//! * **Stateless:** The core library maintains no application state; a scanner
//!   is safe to share across threads.
//! * **Literal-exact:** Configured domains are always matched literally; regex
//!   metacharacters in a domain carry no pattern semantics.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod patterns;
pub mod registry;
pub mod report;
pub mod scanner;

/// Re-exports the public configuration types and functions for managing the
/// internal-domain list.
pub use config::{merge_domains, validate_domains, DomainConfig, MAX_DOMAIN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::DomainGuardError;

/// Re-exports the validator trait, the on-fail policy, and its applicator.
pub use engine::{apply_on_fail, OnFail, Validator};

/// Re-exports the concrete scanner implementation.
pub use scanner::DomainScanner;

/// Re-exports the scan outcome and its payload types.
pub use report::{redact_sensitive, DomainMatch, ErrorSpan, ScanFailure, ScanOutcome};

/// Re-exports the host-integration registry.
pub use registry::ValidatorRegistry;

/// Re-exports functions for one-shot, non-interactive use.
pub use headless::{redact_string, scan_string};

// Re-export pattern-compilation types for advanced usage.
pub use patterns::{build_domain_pattern, compile_patterns, CompiledPattern, CompiledPatterns};
