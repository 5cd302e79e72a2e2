//! Settings that select and configure the external container runtime.

/// Settings for reaching the external container runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Runtime binary name or path (e.g. `docker`, `podman`, `/usr/bin/docker`).
    pub runtime: String,
}

impl RuntimeSettings {
    /// Creates settings for the given runtime binary.
    #[must_use]
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_RUNTIME)
    }
}
