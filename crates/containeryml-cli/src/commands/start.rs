//! `cyml start`: Replace the project's container and run it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use containeryml_runtime::{CommandRunner, Engine};

/// Arguments for the `start` command.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Project directory holding `container.yml`.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Run in the background.
    #[arg(short = 'd')]
    pub detach: bool,
}

/// Executes the `start` command.
///
/// # Errors
///
/// Returns an error if the descriptor is unusable, the image has not been
/// built, or the runtime cannot be invoked.
pub fn execute<R: CommandRunner>(engine: &Engine<R>, args: &StartArgs) -> anyhow::Result<i32> {
    tracing::info!(path = %args.path.display(), detach = args.detach, "start");
    engine
        .start(&args.path, args.detach)
        .with_context(|| format!("cannot start container for {}", args.path.display()))
}
