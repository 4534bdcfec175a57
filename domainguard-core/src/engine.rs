// domainguard-core/src/engine.rs
//! Defines the core `Validator` trait and the on-fail policy.
//!
//! The `Validator` trait is the fixed scan interface a host validation
//! pipeline programs against. It decouples the pipeline from the concrete
//! scanner implementation, so validators can be registered and looked up by
//! name (see [`crate::registry`]) and invoked interchangeably.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use anyhow::Result;

use crate::errors::DomainGuardError;
use crate::report::ScanOutcome;
use crate::scanner::DomainScanner;

/// A named validation operation over a string value.
///
/// Implementations must be pure with respect to `validate`: no shared mutable
/// state between calls, so one instance may serve concurrent callers.
pub trait Validator: Send + Sync + std::fmt::Debug {
    /// The identifier this validator is registered under.
    fn name(&self) -> &str;

    /// Scans `value` and reports a pass/fail outcome.
    ///
    /// Errors are reserved for configuration or internal failures; finding
    /// flagged content is a `ScanOutcome::Fail`, not an `Err`.
    fn validate(&self, value: &str) -> Result<ScanOutcome>;
}

impl Validator for DomainScanner {
    fn name(&self) -> &str {
        "internal_domains"
    }

    fn validate(&self, value: &str) -> Result<ScanOutcome> {
        Ok(self.scan(value))
    }
}

/// What a caller does with a failed scan.
///
/// Supplied explicitly by the caller, never read from ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnFail {
    /// Keep the original value and let the caller inspect the outcome.
    #[default]
    Noop,
    /// Substitute the redacted `fix_value` for the original value.
    Fix,
    /// Turn the failure into an error carrying the scan's message.
    Raise,
}

/// Applies an on-fail policy to a scan outcome.
///
/// Returns the text the caller should continue with: the original on pass (or
/// `Noop`), the redacted copy for `Fix`, or an error for `Raise`.
pub fn apply_on_fail<'a>(
    outcome: &'a ScanOutcome,
    original: &'a str,
    policy: OnFail,
) -> Result<Cow<'a, str>, DomainGuardError> {
    match outcome.failure() {
        None => Ok(Cow::Borrowed(original)),
        Some(failure) => match policy {
            OnFail::Noop => Ok(Cow::Borrowed(original)),
            OnFail::Fix => Ok(Cow::Borrowed(failure.fix_value.as_str())),
            OnFail::Raise => Err(DomainGuardError::ValidationFailed(
                failure.error_message.clone(),
            )),
        },
    }
}
