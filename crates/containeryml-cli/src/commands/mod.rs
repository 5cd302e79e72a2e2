//! CLI command definitions and dispatch.

pub mod build;
pub mod logs;
pub mod start;
pub mod stats;
pub mod stop;

use clap::{Parser, Subcommand};
use containeryml_common::config::RuntimeSettings;
use containeryml_common::constants::{BIN_NAME, DEFAULT_RUNTIME, RUNTIME_ENV};
use containeryml_runtime::{Engine, RuntimeCli};

/// Run one container per project directory, configured by `container.yml`.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Container runtime binary to delegate to.
    #[arg(long, global = true, env = RUNTIME_ENV, default_value = DEFAULT_RUNTIME)]
    pub runtime: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a container
    Start(start::StartArgs),
    /// Kill a container (SIGKILL)
    Stop(stop::StopArgs),
    /// Build the image for a container
    Build(build::BuildArgs),
    /// View container output
    Logs(logs::LogsArgs),
    /// View container resource usage
    Stats(stats::StatsArgs),
}

/// Dispatches the parsed CLI command to its handler and returns the exit
/// code to report.
///
/// # Errors
///
/// Returns an error if the runtime cannot be found or the command fails
/// before the runtime reports a status.
pub fn execute(cli: Cli) -> anyhow::Result<i32> {
    let settings = RuntimeSettings::new(cli.runtime);
    let engine = Engine::new(RuntimeCli::locate(&settings)?);

    match cli.command {
        Command::Start(args) => start::execute(&engine, &args),
        Command::Stop(args) => stop::execute(&engine, &args),
        Command::Build(args) => build::execute(&engine, &args),
        Command::Logs(args) => logs::execute(&engine, &args),
        Command::Stats(args) => stats::execute(&engine, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn path_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["cyml", "logs"]).expect("parse");
        let Command::Logs(args) = cli.command else {
            unreachable!("parsed logs");
        };
        assert_eq!(args.path, std::path::PathBuf::from("."));
    }

    #[test]
    fn start_accepts_detach_flag() {
        let cli = Cli::try_parse_from(["cyml", "start", "/srv/web", "-d"]).expect("parse");
        let Command::Start(args) = cli.command else {
            unreachable!("parsed start");
        };
        assert!(args.detach);
        assert_eq!(args.path, std::path::PathBuf::from("/srv/web"));
    }

    #[test]
    fn build_accepts_limit_flag() {
        let cli = Cli::try_parse_from(["cyml", "build", "-l"]).expect("parse");
        let Command::Build(args) = cli.command else {
            unreachable!("parsed build");
        };
        assert!(args.limit);
    }

    #[test]
    fn runtime_flag_overrides_default() {
        let cli = Cli::try_parse_from(["cyml", "--runtime", "podman", "stop"]).expect("parse");
        assert_eq!(cli.runtime, "podman");
    }
}
