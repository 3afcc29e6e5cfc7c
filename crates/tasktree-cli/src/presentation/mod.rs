pub mod encoding;
pub mod formatters;
pub mod renderables;
pub mod renderers;

pub use encoding::OutputEncoding;
pub use renderables::Renderable;
pub use renderers::{DEFAULT_IGNORED_KEYS, RenderOptions, default_ignored_keys, render_task_nodes};
