// domainguard/src/lib.rs
//! # DomainGuard CLI Application
//!
//! This crate provides the command-line interface for the DomainGuard scanner.
//! The scanning and redaction logic itself lives in `domainguard-core`; this
//! crate handles argument parsing, input/output plumbing, and presentation.

pub mod cli;
pub mod commands;
pub mod logger;
