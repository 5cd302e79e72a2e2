//! # containeryml-common
//!
//! Shared types, error definitions, runtime settings, and constants
//! used across the containeryml workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the primitives the descriptor translator,
//! the dispatcher, and the CLI agree on.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
