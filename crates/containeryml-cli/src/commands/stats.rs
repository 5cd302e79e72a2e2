//! `cyml stats`: Stream the running container's resource usage.

use std::path::PathBuf;

use clap::Args;
use containeryml_runtime::{CommandRunner, Engine};

/// Arguments for the `stats` command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Project directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Executes the `stats` command, blocking until the stream ends.
///
/// # Errors
///
/// Returns an error if the container is not running or the runtime
/// cannot be invoked.
pub fn execute<R: CommandRunner>(engine: &Engine<R>, args: &StatsArgs) -> anyhow::Result<i32> {
    Ok(engine.stats(&args.path)?)
}
