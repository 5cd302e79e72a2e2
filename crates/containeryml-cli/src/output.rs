//! User-facing messages and exit codes.
//!
//! Precondition failures (no image, container not running) get a short red
//! message on stdout. Everything else is reported as `error: ...` on stderr
//! with its full context chain.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::IsTerminal;
use std::process::ExitCode;

use containeryml_common::error::ContainerYmlError;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Prints an error and any hint that goes with it.
pub fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ContainerYmlError>() {
        Some(inner) if inner.is_precondition() => {
            println!("{}", red(&inner.to_string(), std::io::stdout().is_terminal()));
            if let Some(hint) = hint(inner) {
                println!("{hint}");
            }
        }
        _ => {
            let message = format!("error: {err:#}");
            eprintln!("{}", red(&message, std::io::stderr().is_terminal()));
        }
    }
}

/// Follow-up advice for a precondition failure.
const fn hint(err: &ContainerYmlError) -> Option<&'static str> {
    match err {
        ContainerYmlError::ImageMissing { .. } => Some("Build the image before continuing"),
        _ => None,
    }
}

/// Converts a runtime exit code into this process's exit code.
///
/// Codes outside `0..=255` become a generic failure.
pub fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(status_byte(code))
}

fn status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn red(text: &str, color: bool) -> String {
    if color {
        format!("{RED}{text}{RESET}")
    } else {
        text.to_owned()
    }
}
