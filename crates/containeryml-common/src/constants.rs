//! System-wide constants and defaults.

/// Name of the per-project descriptor file.
pub const DESCRIPTOR_FILE: &str = "container.yml";

/// Container runtime binary used when none is configured.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Environment variable that overrides the runtime binary.
pub const RUNTIME_ENV: &str = "CONTAINERYML_RUNTIME";

/// Number of trailing log lines shown before following.
pub const LOG_TAIL_LINES: u32 = 20;

/// Multiplier from the descriptor's `cpu` percentage to a CFS quota.
pub const CPU_QUOTA_SCALE: i64 = 1000;

/// Signal sent when stopping a container.
pub const KILL_SIGNAL: &str = "9";

/// Restart policy applied to detached containers.
pub const DETACHED_RESTART_POLICY: &str = "--restart=always";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "cyml";
