//! `cyml build`: Build the project's image, tagged with its container name.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use containeryml_runtime::{CommandRunner, Engine};

/// Arguments for the `build` command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project directory used as the build context.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Limit build process to container resources.
    #[arg(short = 'l')]
    pub limit: bool,
}

/// Executes the `build` command.
///
/// # Errors
///
/// Returns an error if `-l` is given and the descriptor is unusable, or
/// the runtime cannot be invoked.
pub fn execute<R: CommandRunner>(engine: &Engine<R>, args: &BuildArgs) -> anyhow::Result<i32> {
    tracing::info!(path = %args.path.display(), limit = args.limit, "build");
    engine
        .build(&args.path, args.limit)
        .with_context(|| format!("cannot build image for {}", args.path.display()))
}
