//! # cyml
//!
//! Runs the container for a project directory by translating its
//! `container.yml` into flags for an external container runtime.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match commands::execute(cli) {
        Ok(code) => output::exit_code(code),
        Err(err) => {
            output::report(&err);
            ExitCode::FAILURE
        }
    }
}
