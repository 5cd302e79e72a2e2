//! Unified error types for the containeryml workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ContainerYmlError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A YAML document could not be parsed.
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// No image tagged with the container name exists yet.
    #[error("No image {name} found")]
    ImageMissing {
        /// Container (and image) name.
        name: String,
    },

    /// The container is not currently running.
    #[error("Container not running")]
    NotRunning {
        /// Container name that was checked.
        name: String,
    },

    /// A runtime query exited unsuccessfully.
    #[error("`{command}` exited with status {code}")]
    Runtime {
        /// The command line that failed.
        command: String,
        /// Exit code reported by the runtime.
        code: i32,
    },

    /// The runtime process could not be spawned or waited on.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was being executed.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ContainerYmlError {
    /// Returns whether this error is a user-facing precondition failure
    /// (missing image, container not running) rather than a fault.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::ImageMissing { .. } | Self::NotRunning { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ContainerYmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_missing_message_names_the_image() {
        let err = ContainerYmlError::ImageMissing { name: "web".into() };
        assert_eq!(err.to_string(), "No image web found");
        assert!(err.is_precondition());
    }

    #[test]
    fn not_running_is_a_precondition() {
        let err = ContainerYmlError::NotRunning { name: "web".into() };
        assert_eq!(err.to_string(), "Container not running");
        assert!(err.is_precondition());
    }

    #[test]
    fn config_errors_are_faults() {
        let err = ContainerYmlError::Config {
            message: "bad cpu".into(),
        };
        assert!(!err.is_precondition());
        assert_eq!(err.to_string(), "invalid configuration: bad cpu");
    }
}
