//! `cyml stop`: Kill and remove the project's container.

use std::path::PathBuf;

use clap::Args;
use containeryml_runtime::{CommandRunner, Engine};

/// Arguments for the `stop` command.
#[derive(Args, Debug)]
pub struct StopArgs {
    /// Project directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Executes the `stop` command. Succeeds whether or not a container existed.
///
/// # Errors
///
/// Returns an error if no container name can be derived from the path.
pub fn execute<R: CommandRunner>(engine: &Engine<R>, args: &StopArgs) -> anyhow::Result<i32> {
    Ok(engine.stop(&args.path)?)
}
