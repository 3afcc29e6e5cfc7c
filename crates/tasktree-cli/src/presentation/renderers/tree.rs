use crate::presentation::encoding::OutputEncoding;

/// Connector strings used when drawing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStyle {
    pub fork: &'static str,
    pub last: &'static str,
    pub vertical: &'static str,
    pub blank: &'static str,
}

impl TreeStyle {
    pub const UNICODE: TreeStyle = TreeStyle {
        fork: "├── ",
        last: "└── ",
        vertical: "│   ",
        blank: "    ",
    };

    pub const ASCII: TreeStyle = TreeStyle {
        fork: "|-- ",
        last: "`-- ",
        vertical: "|   ",
        blank: "    ",
    };

    pub fn for_encoding(encoding: OutputEncoding) -> Self {
        if encoding.supports_box_drawing() {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }
}

/// Draw a tree, one node per line, each line newline terminated.
///
/// The tree is walked depth-first through `get_children`; `format_node`
/// gives the label of each node.
pub fn format_tree<N, F, G>(root: &N, style: &TreeStyle, format_node: F, get_children: G) -> String
where
    F: Fn(&N) -> String,
    G: Fn(&N) -> Vec<N>,
{
    let mut out = format_node(root);
    out.push('\n');
    write_children(&mut out, root, "", style, &format_node, &get_children);
    out
}

fn write_children<N, F, G>(
    out: &mut String,
    node: &N,
    prefix: &str,
    style: &TreeStyle,
    format_node: &F,
    get_children: &G,
) where
    F: Fn(&N) -> String,
    G: Fn(&N) -> Vec<N>,
{
    let children = get_children(node);
    let count = children.len();

    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        let (connector, continuation) = if is_last {
            (style.last, style.blank)
        } else {
            (style.fork, style.vertical)
        };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&format_node(child));
        out.push('\n');

        let next_prefix = format!("{}{}", prefix, continuation);
        write_children(out, child, &next_prefix, style, format_node, get_children);
    }
}
