//! tasktree - render Eliot-style causal task logs as ASCII trees.
//!
//! Messages are grouped into one tree per task and nested by task level.
//! Each node shows its fields as child lines, with bookkeeping keys hidden
//! and long values truncated.
//!
//! # Example
//!
//! ```no_run
//! use tasktree_cli::presentation::{RenderOptions, render_task_nodes};
//! use tasktree_engine::Tree;
//! use tasktree_types::Task;
//!
//! let line = r#"{"timestamp": 0, "task_uuid": "u", "task_level": [1], "message_type": "hello"}"#;
//! let mut tree = Tree::new();
//! tree.merge_tasks(vec![Task::from_json_str(line)?], &[])?;
//!
//! let mut out = Vec::new();
//! render_task_nodes(&mut out, tree.nodes(None)?, &RenderOptions::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod args;
mod commands;
pub mod config;
mod filters;
mod loader;
mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
