// domainguard/src/main.rs
//! DomainGuard CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! implementations. Exit codes: 0 = pass, 1 = internal domains found,
//! 2 = usage or configuration error.

use clap::Parser;
use domainguard::cli::{Cli, Commands};
use domainguard::commands::{sanitize, scan};
use domainguard::logger;

fn main() {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let result = match &args.command {
        Commands::Scan(cmd) => scan::run_scan(cmd, args.quiet),
        Commands::Sanitize(cmd) => sanitize::run_sanitize(cmd, args.quiet),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    }
}
