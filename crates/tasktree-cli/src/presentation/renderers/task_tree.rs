use crate::presentation::encoding::OutputEncoding;
use crate::presentation::renderables::Renderable;
use crate::presentation::renderers::tree::{TreeStyle, format_tree};
use std::collections::BTreeSet;
use std::io::{self, Write};
use tasktree_engine::TaskNode;

/// Bookkeeping keys hidden unless the caller supplies its own set.
pub const DEFAULT_IGNORED_KEYS: [&str; 4] =
    ["action_status", "action_type", "task_level", "task_uuid"];

pub fn default_ignored_keys() -> BTreeSet<String> {
    DEFAULT_IGNORED_KEYS.iter().map(|k| k.to_string()).collect()
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Maximum length of a field value; `0` disables truncation
    pub field_limit: usize,
    /// Keys hidden at every depth; `None` means [`DEFAULT_IGNORED_KEYS`]
    pub ignored_keys: Option<BTreeSet<String>>,
    pub encoding: OutputEncoding,
}

/// Render task trees to `writer`.
///
/// Each `(task_uuid, node)` pair produces one tree written in a single call,
/// followed by a separate newline. The UUID is not printed; top-level nodes
/// already carry it as their name.
pub fn render_task_nodes<'a, W, I>(
    writer: &mut W,
    nodes: I,
    options: &RenderOptions,
) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a TaskNode)>,
{
    let defaults;
    let ignored_keys = match &options.ignored_keys {
        Some(keys) => keys,
        None => {
            defaults = default_ignored_keys();
            &defaults
        }
    };
    let style = TreeStyle::for_encoding(options.encoding);

    let mut rendered = 0usize;
    for (_task_uuid, node) in nodes {
        let tree = format_tree(
            &Renderable::Node(node),
            &style,
            |r| r.render(options.encoding, options.field_limit),
            |r| r.children(ignored_keys),
        );
        writer.write_all(&options.encoding.encode(&tree))?;
        writer.write_all(b"\n")?;
        rendered += 1;
    }

    tracing::debug!(trees = rendered, encoding = %options.encoding, "rendered task trees");
    Ok(())
}
