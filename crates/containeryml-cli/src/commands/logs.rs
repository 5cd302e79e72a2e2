//! `cyml logs`: Follow the running container's output.

use std::path::PathBuf;

use clap::Args;
use containeryml_runtime::{CommandRunner, Engine};

/// Arguments for the `logs` command.
#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Project directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Executes the `logs` command, blocking until the stream ends.
///
/// # Errors
///
/// Returns an error if the container is not running or the runtime
/// cannot be invoked.
pub fn execute<R: CommandRunner>(engine: &Engine<R>, args: &LogsArgs) -> anyhow::Result<i32> {
    Ok(engine.logs(&args.path)?)
}
