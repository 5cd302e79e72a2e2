//! # containeryml-descriptor
//!
//! Reads a project's `container.yml` and turns it into command-line flags
//! for the external container runtime.
//!
//! Handles:
//! - **Descriptor**: Loading the YAML mapping as ordered `(key, value)` entries.
//! - **Env files**: Secondary YAML files of `KEY: VALUE` pairs.
//! - **Translate**: The per-key dispatch table producing `run` and `build` flags.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod descriptor;
pub mod env_file;
pub mod translate;

pub use descriptor::Descriptor;
pub use translate::{KeyRule, build_flags, run_flags};
