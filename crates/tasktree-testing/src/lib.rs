//! Testing infrastructure for tasktree integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated environment for driving the CLI binary
//! - `assertions`: Custom assertions over rendered trees
//! - `fixtures`: Builders for Eliot-style log messages

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
