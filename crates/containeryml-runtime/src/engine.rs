//! The command dispatcher: start, stop, build, logs, and stats for the
//! single container belonging to a project directory.

use std::path::Path;

use containeryml_common::constants::LOG_TAIL_LINES;
use containeryml_common::error::{ContainerYmlError, Result};
use containeryml_common::types::ContainerName;
use containeryml_descriptor::{Descriptor, build_flags, run_flags};

use crate::invocation::{Invocation, RunMode};
use crate::runner::{CommandRunner, RuntimeCli};

/// Orchestrates container operations over a [`CommandRunner`].
///
/// Holds no state of its own. Whether a container or image exists is
/// asked of the runtime every time.
pub struct Engine<R = RuntimeCli> {
    runner: R,
}

impl<R: CommandRunner> Engine<R> {
    /// Creates an engine that runs invocations through `runner`.
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Replaces any existing container for the project and runs a new one
    /// from the image of the same name.
    ///
    /// The descriptor is loaded and translated before any runtime call.
    /// Returns the exit code of `run`.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor cannot be loaded or translated,
    /// if no image has been built ([`ContainerYmlError::ImageMissing`]),
    /// or if the runtime cannot be executed.
    pub fn start(&self, path: &Path, detach: bool) -> Result<i32> {
        let name = ContainerName::from_path(path)?;
        let descriptor = Descriptor::load(name.project_dir())?;
        let flags = run_flags(&descriptor, name.project_dir())?;

        self.remove_container(&name);

        if !self.image_exists(&name)? {
            return Err(ContainerYmlError::ImageMissing {
                name: name.to_string(),
            });
        }

        let mode = RunMode::from_detach(detach);
        tracing::info!(name = %name, ?mode, "starting container");
        self.runner
            .attach(&Invocation::run(name.as_str(), &flags, mode))
    }

    /// Kills and removes the project's container. Both steps are best-effort.
    ///
    /// # Errors
    ///
    /// Returns an error only if the container name cannot be derived.
    pub fn stop(&self, path: &Path) -> Result<i32> {
        let name = ContainerName::from_path(path)?;
        tracing::info!(name = %name, "stopping container");
        self.remove_container(&name);
        Ok(0)
    }

    /// Builds the project's image, tagged with the container name.
    ///
    /// With `limit_resources`, the descriptor's CPU and memory limits are
    /// applied to the build. Returns the exit code of `build`.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit_resources` is set and the descriptor
    /// cannot be loaded or translated, or if the runtime cannot be executed.
    pub fn build(&self, path: &Path, limit_resources: bool) -> Result<i32> {
        let name = ContainerName::from_path(path)?;
        let flags = if limit_resources {
            build_flags(&Descriptor::load(name.project_dir())?)?
        } else {
            Vec::new()
        };

        tracing::info!(name = %name, limit_resources, "building image");
        self.runner
            .attach(&Invocation::build(name.as_str(), &flags, name.project_dir()))
    }

    /// Follows the running container's output, starting from the last
    /// [`LOG_TAIL_LINES`] lines. Blocks until the runtime exits.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerYmlError::NotRunning`] without invoking the
    /// stream if the container is not running.
    pub fn logs(&self, path: &Path) -> Result<i32> {
        let name = self.require_running(path)?;
        self.runner
            .attach(&Invocation::logs(name.as_str(), LOG_TAIL_LINES))
    }

    /// Streams the running container's resource usage. Blocks until the
    /// runtime exits.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerYmlError::NotRunning`] without invoking the
    /// stream if the container is not running.
    pub fn stats(&self, path: &Path) -> Result<i32> {
        let name = self.require_running(path)?;
        self.runner.attach(&Invocation::stats(name.as_str()))
    }

    /// Returns whether an image tagged with `name` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime query fails.
    pub fn image_exists(&self, name: &ContainerName) -> Result<bool> {
        let out = self.runner.capture(&Invocation::images(name.as_str()))?;
        Ok(!out.trim().is_empty())
    }

    /// Returns whether a container matching `name` is running.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime query fails.
    pub fn container_running(&self, name: &ContainerName) -> Result<bool> {
        let out = self.runner.capture(&Invocation::running(name.as_str()))?;
        Ok(!out.trim().is_empty())
    }

    fn require_running(&self, path: &Path) -> Result<ContainerName> {
        let name = ContainerName::from_path(path)?;
        if !self.container_running(&name)? {
            return Err(ContainerYmlError::NotRunning {
                name: name.to_string(),
            });
        }
        Ok(name)
    }

    /// `kill -s 9` then `rm`. The container may not exist, so failures
    /// are only logged.
    fn remove_container(&self, name: &ContainerName) {
        for invocation in [Invocation::kill(name.as_str()), Invocation::remove(name.as_str())] {
            match self.runner.quiet(&invocation) {
                Ok(0) => {}
                Ok(code) => {
                    tracing::debug!(command = %invocation, code, "cleanup step failed, ignoring");
                }
                Err(e) => tracing::warn!(command = %invocation, error = %e, "cleanup step failed"),
            }
        }
    }
}
