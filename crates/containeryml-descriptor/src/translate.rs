//! Translation of descriptor entries into runtime flags.
//!
//! Every key is looked up once in a fixed dispatch table ([`KeyRule`]).
//! Unknown keys fall through to [`KeyRule::PassThrough`] and become
//! `--<key> <value>`, which the runtime may reject at execution time.
//!
//! `memory` and `env-file` keep their generic `--<key> <value>` flag after
//! their special handling, so `memory` yields both `--memory-swap` and
//! `--memory`, and `env-file` yields its expanded `-e` pairs plus an
//! `--env-file` naming the same file. Relative env-file paths are resolved
//! against the project directory before either use, since the runtime
//! resolves them against the caller's cwd.

use std::path::Path;

use containeryml_common::constants::CPU_QUOTA_SCALE;
use containeryml_common::error::{ContainerYmlError, Result};
use serde_yaml::Value;

use crate::descriptor::{Descriptor, kind, scalar_text};
use crate::env_file::{assignment, load_env_file};

/// How a descriptor key is turned into flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// One short flag per item (`volumes` → `-v`, `ports` → `-p`, `env` → `-e`).
    Repeated(&'static str),
    /// A bare boolean flag; the value is ignored.
    Switch,
    /// `cpu` percentage scaled into `--cpu-quota`.
    CpuQuota,
    /// `--memory-swap` pinned to the memory limit, then `--memory`.
    MemoryWithSwap,
    /// Expands a YAML env file into `-e` flags, then `--env-file`.
    EnvFile,
    /// `--<key> <value>`.
    PassThrough,
}

impl KeyRule {
    /// Returns the rule for a descriptor key.
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        match key {
            "volumes" => Self::Repeated("-v"),
            "ports" => Self::Repeated("-p"),
            "env" => Self::Repeated("-e"),
            "privileged" => Self::Switch,
            "cpu" => Self::CpuQuota,
            "memory" => Self::MemoryWithSwap,
            "env-file" => Self::EnvFile,
            _ => Self::PassThrough,
        }
    }

    /// Appends the flags for one entry.
    ///
    /// `base_dir` anchors relative env-file paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has the wrong shape for the rule, or
    /// an env file cannot be loaded.
    pub fn apply(
        self,
        key: &str,
        value: &Value,
        base_dir: &Path,
        flags: &mut Vec<String>,
    ) -> Result<()> {
        match self {
            Self::Repeated(flag) => {
                for item in items(key, value)? {
                    flags.push(flag.to_owned());
                    flags.push(item);
                }
            }
            Self::Switch => flags.push(long_flag(key)),
            Self::CpuQuota => {
                let quota = cpu_quota(key, value)?;
                push_pair(flags, "cpu-quota", quota.to_string());
            }
            Self::MemoryWithSwap => {
                let limit = require_scalar(key, value)?;
                push_pair(flags, "memory-swap", limit.clone());
                push_pair(flags, key, limit);
            }
            Self::EnvFile => {
                let raw = require_scalar(key, value)?;
                let path = base_dir.join(&raw);
                for (name, val) in load_env_file(&path)? {
                    flags.push("-e".to_owned());
                    flags.push(assignment(&name, &val));
                }
                push_pair(flags, key, path.display().to_string());
            }
            Self::PassThrough => match value {
                Value::Null => flags.push(long_flag(key)),
                Value::Mapping(_) => {
                    return Err(shape_error(key, value, "a scalar or a sequence"));
                }
                _ => {
                    for item in items(key, value)? {
                        push_pair(flags, key, item);
                    }
                }
            },
        }
        Ok(())
    }
}

/// Translates a descriptor into flags for the runtime's `run` subcommand.
///
/// Flags follow the descriptor's file order.
///
/// # Errors
///
/// Returns an error if any entry has an unusable value or an env file
/// cannot be loaded.
pub fn run_flags(descriptor: &Descriptor, base_dir: &Path) -> Result<Vec<String>> {
    let mut flags = Vec::new();
    for (key, value) in descriptor.entries() {
        let rule = KeyRule::for_key(key);
        tracing::debug!(key = %key, ?rule, "translating descriptor entry");
        rule.apply(key, value, base_dir, &mut flags)?;
    }
    Ok(flags)
}

/// Translates a descriptor into resource flags for the runtime's `build`
/// subcommand.
///
/// Only `cpu` (scaled into `--cpu-quota`), a literal `cpu-quota`, and
/// `memory` are honoured. No swap limit is added and every other key is
/// ignored.
///
/// # Errors
///
/// Returns an error if one of the honoured keys has an unusable value.
pub fn build_flags(descriptor: &Descriptor) -> Result<Vec<String>> {
    let mut flags = Vec::new();
    for (key, value) in descriptor.entries() {
        match key.as_str() {
            "cpu" => push_pair(&mut flags, "cpu-quota", cpu_quota(key, value)?.to_string()),
            "cpu-quota" | "memory" => push_pair(&mut flags, key, require_scalar(key, value)?),
            _ => tracing::debug!(key = %key, "ignoring key for build"),
        }
    }
    Ok(flags)
}

fn long_flag(key: &str) -> String {
    format!("--{key}")
}

fn push_pair(flags: &mut Vec<String>, key: &str, value: String) {
    flags.push(long_flag(key));
    flags.push(value);
}

/// Items of a list-valued key. A lone scalar is a single item and null is
/// no items.
fn items(key: &str, value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(seq) => seq.iter().map(|item| require_scalar(key, item)).collect(),
        other => Ok(vec![require_scalar(key, other)?]),
    }
}

fn require_scalar(key: &str, value: &Value) -> Result<String> {
    scalar_text(value).ok_or_else(|| shape_error(key, value, "a scalar"))
}

/// Scales a `cpu` percentage into a CFS quota.
fn cpu_quota(key: &str, value: &Value) -> Result<i64> {
    let percent = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| shape_error(key, value, "an integer"))?;

    percent
        .checked_mul(CPU_QUOTA_SCALE)
        .ok_or_else(|| ContainerYmlError::Config {
            message: format!("{key}: {percent} is too large"),
        })
}

fn shape_error(key: &str, value: &Value, expected: &str) -> ContainerYmlError {
    ContainerYmlError::Config {
        message: format!("{key} must be {expected}, found {}", kind(value)),
    }
}
