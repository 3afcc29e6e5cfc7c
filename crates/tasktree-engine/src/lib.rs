// Engine module - task tree reconstruction
// This layer sits between parsed messages (types) and CLI presentation

mod error;
mod node;
mod tree;

pub use error::{Error, Result};
pub use node::{TaskNode, task_name};
pub use tree::{TaskFilter, Tree};
