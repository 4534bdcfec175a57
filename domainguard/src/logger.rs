// domainguard/src/logger.rs
//! Logger initialization for the CLI.
//!
//! An explicit level from `--quiet`/`--debug` overrides `RUST_LOG`; otherwise
//! the environment decides, defaulting to warnings only.

use env_logger::{Builder, Env};
use log::LevelFilter;

pub fn init_logger(override_level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = override_level {
        builder.filter_level(level);
    }
    // Tests may initialize the logger more than once.
    let _ = builder.format_timestamp(None).try_init();
}
