//! errors.rs - Custom error types for the domainguard-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Scan outcomes (pass/fail) are domain results, not errors, and live in
//! [`crate::report`].
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `domainguard-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DomainGuardError {
    #[error("Failed to compile pattern for domain '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Domain '{0}': length ({1}) exceeds maximum allowed ({2})")]
    DomainLengthExceeded(String, usize, usize),

    #[error("Domain list entry {0} is empty")]
    EmptyDomain(usize),

    #[error("Domain '{0}' contains whitespace")]
    DomainContainsWhitespace(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("No validator registered under name '{0}'")]
    UnknownValidator(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
