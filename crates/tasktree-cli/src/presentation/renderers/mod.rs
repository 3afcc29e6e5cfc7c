pub mod task_tree;
pub mod tree;

pub use task_tree::{DEFAULT_IGNORED_KEYS, RenderOptions, default_ignored_keys, render_task_nodes};
pub use tree::{TreeStyle, format_tree};
