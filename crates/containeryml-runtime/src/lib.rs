//! Container lifecycle dispatch for containeryml.
//!
//! Nothing here runs containers itself. Each operation resolves the
//! project's container name, assembles an [`invocation::Invocation`] and
//! hands it to a [`runner::CommandRunner`], normally the runtime's own CLI.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod engine;
pub mod invocation;
pub mod runner;

pub use engine::Engine;
pub use invocation::{Invocation, RunMode};
pub use runner::{CommandRunner, RuntimeCli};
