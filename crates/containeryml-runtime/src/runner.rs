//! Execution of runtime invocations as child processes.
//!
//! [`CommandRunner`] is the only place containeryml touches processes.
//! [`RuntimeCli`] implements it against the real runtime binary; tests
//! substitute a recorder.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Once;

use containeryml_common::config::RuntimeSettings;
use containeryml_common::error::{ContainerYmlError, Result};

use crate::invocation::Invocation;

/// Runs runtime invocations and reports their outcome.
pub trait CommandRunner {
    /// Runs the invocation and returns its standard output.
    ///
    /// Standard error is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be run or exits unsuccessfully.
    fn capture(&self, invocation: &Invocation) -> Result<String>;

    /// Runs the invocation with all streams discarded and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be run.
    fn quiet(&self, invocation: &Invocation) -> Result<i32>;

    /// Runs the invocation attached to this process's terminal, blocking
    /// until it exits, and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be run.
    fn attach(&self, invocation: &Invocation) -> Result<i32>;
}

/// The external runtime's command-line tool.
#[derive(Debug, Clone)]
pub struct RuntimeCli {
    program: PathBuf,
}

impl RuntimeCli {
    /// Uses `program` as-is, without looking it up.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolves the configured runtime on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if no executable by that name or path exists.
    pub fn locate(settings: &RuntimeSettings) -> Result<Self> {
        let program = which::which(&settings.runtime).map_err(|_| ContainerYmlError::NotFound {
            kind: "container runtime",
            id: format!("{} (install it or pass --runtime)", settings.runtime),
        })?;
        tracing::debug!(program = %program.display(), "resolved container runtime");
        Ok(Self::new(program))
    }

    fn command(&self, invocation: &Invocation) -> Command {
        tracing::debug!(program = %self.program.display(), args = ?invocation.args(), "invoking runtime");
        let mut cmd = Command::new(&self.program);
        let _ = cmd.args(invocation.args());
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ContainerYmlError {
        ContainerYmlError::Spawn {
            program: self.program.display().to_string(),
            source,
        }
    }
}

impl CommandRunner for RuntimeCli {
    fn capture(&self, invocation: &Invocation) -> Result<String> {
        let output = self
            .command(invocation)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(ContainerYmlError::Runtime {
                command: invocation.to_string(),
                code: exit_code(output.status),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn quiet(&self, invocation: &Invocation) -> Result<i32> {
        let status = self
            .command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.spawn_error(e))?;
        Ok(exit_code(status))
    }

    fn attach(&self, invocation: &Invocation) -> Result<i32> {
        absorb_interrupts();
        let status = self
            .command(invocation)
            .status()
            .map_err(|e| self.spawn_error(e))?;
        let code = exit_code(status);
        tracing::debug!(command = %invocation, code, "runtime exited");
        Ok(code)
    }
}

/// Keeps Ctrl+C from killing this process while a child shares the
/// terminal. The child receives the same SIGINT and decides when to stop;
/// its exit status is then reported as ours.
fn absorb_interrupts() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| {
            tracing::debug!("interrupt received, waiting for runtime to exit");
        }) {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        }
    });
}

/// Maps an exit status to a shell-style exit code.
///
/// Signal deaths become `128 + signal` on Unix.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh() -> RuntimeCli {
        RuntimeCli::new("/bin/sh")
    }

    #[test]
    fn capture_returns_stdout() {
        let out = sh()
            .capture(&Invocation::new(["-c", "echo abc123; echo noise >&2"]))
            .unwrap();
        assert_eq!(out.trim(), "abc123");
    }

    #[test]
    fn capture_fails_on_nonzero_exit() {
        let err = sh().capture(&Invocation::new(["-c", "exit 3"])).unwrap_err();
        assert!(matches!(err, ContainerYmlError::Runtime { code: 3, .. }));
    }

    #[test]
    fn quiet_reports_exit_code() {
        assert_eq!(sh().quiet(&Invocation::new(["-c", "exit 0"])).unwrap(), 0);
        assert_eq!(sh().quiet(&Invocation::new(["-c", "exit 7"])).unwrap(), 7);
    }

    #[test]
    fn attach_propagates_exit_code() {
        assert_eq!(sh().attach(&Invocation::new(["-c", "exit 42"])).unwrap(), 42);
    }

    #[test]
    fn signal_death_maps_to_128_plus_signal() {
        let code = sh().quiet(&Invocation::new(["-c", "kill -9 $$"])).unwrap();
        assert_eq!(code, 137);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let runner = RuntimeCli::new("/definitely/not/a/runtime");
        let err = runner.quiet(&Invocation::new(["ps"])).unwrap_err();
        assert!(matches!(err, ContainerYmlError::Spawn { .. }));
    }

    #[test]
    fn locate_rejects_unknown_runtime() {
        let settings = RuntimeSettings::new("containeryml-no-such-runtime");
        let err = RuntimeCli::locate(&settings).unwrap_err();
        assert!(matches!(err, ContainerYmlError::NotFound { .. }));
    }

    #[test]
    fn locate_accepts_absolute_paths() {
        let runner = RuntimeCli::locate(&RuntimeSettings::new("/bin/sh")).unwrap();
        assert!(runner.program.ends_with("sh"));
    }
}
