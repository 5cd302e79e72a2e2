//! Domain primitive types used across the containeryml workspace.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{ContainerYmlError, Result};

/// Canonical container identity for a project directory.
///
/// The name is the final segment of the project's absolute, lexically
/// normalized path. It doubles as the image tag, so every operation on
/// the same directory agrees on identity. Two directories sharing a base
/// name collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerName {
    name: String,
    project_dir: PathBuf,
}

impl ContainerName {
    /// Derives the container name for a project path.
    ///
    /// Relative paths are resolved against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read, or if the
    /// normalized path has no final segment (the filesystem root) or that
    /// segment is not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir().map_err(|e| ContainerYmlError::Io {
                path: PathBuf::from("."),
                source: e,
            })?;
            cwd.join(path)
        };
        let project_dir = normalize(&absolute);

        let name = project_dir
            .file_name()
            .ok_or_else(|| ContainerYmlError::Config {
                message: format!(
                    "cannot derive a container name from {}",
                    project_dir.display()
                ),
            })?
            .to_str()
            .ok_or_else(|| ContainerYmlError::Config {
                message: format!("project directory name is not UTF-8: {}", project_dir.display()),
            })?
            .to_owned();

        Ok(Self { name, project_dir })
    }

    /// Returns the container name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the absolute project directory the name was derived from.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Lexically removes `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let _ = out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
