// domainguard-core/src/registry.rs
//! A simple name-to-validator mapping for host integration.
//!
//! The host pipeline builds one registry at process start, registers each
//! validator under a stable identifier, and looks implementations up by name
//! when a validation step runs. The registry itself is plain data; it holds
//! no policy and performs no scanning.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::config::DomainConfig;
use crate::engine::Validator;
use crate::errors::DomainGuardError;
use crate::scanner::DomainScanner;

/// Maps validator identifiers to implementations.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, Arc<dyn Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry with the built-in `internal_domains` validator
    /// configured from the given domain list.
    pub fn with_internal_domains(config: DomainConfig) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(DomainScanner::new(config)?));
        Ok(registry)
    }

    /// Registers a validator under its own name, replacing any previous
    /// registration for that name.
    pub fn register(&mut self, validator: Arc<dyn Validator>) {
        debug!("Registering validator '{}'", validator.name());
        self.validators.insert(validator.name().to_string(), validator);
    }

    /// Looks up a validator by its registered name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Validator>, DomainGuardError> {
        self.validators
            .get(name)
            .cloned()
            .ok_or_else(|| DomainGuardError::UnknownValidator(name.to_string()))
    }

    /// Registered names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
