use crate::presentation::encoding::OutputEncoding;
use crate::presentation::formatters::{format_value, truncate_value};
use std::collections::BTreeSet;
use tasktree_engine::TaskNode;
use tasktree_types::{FieldMap, FieldValue};

/// One line of a rendered task tree.
///
/// Task nodes and their fields are drawn in the same tree, so both are
/// exposed through the same two operations: the text of the line and the
/// lines nested under it.
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    /// A task (or structural) node, labelled with its name
    Node(&'a TaskNode),
    /// A field of a task, or of a mapping-valued field
    Field { key: &'a str, value: &'a FieldValue },
}

impl<'a> Renderable<'a> {
    /// Text of this line.
    ///
    /// Fields render as `key: value`. A mapping-valued field renders only its
    /// key; its entries become child lines. Only field values are subject to
    /// `field_limit` (`0` keeps the whole first line).
    pub fn render(&self, encoding: OutputEncoding, field_limit: usize) -> String {
        match *self {
            Renderable::Node(node) => encoding.normalize(node.name()).into_owned(),
            Renderable::Field { key, value } => {
                let key = encoding.normalize(key);
                if value.as_mapping().is_some() {
                    return key.into_owned();
                }

                let formatted = format_value(value, encoding);
                let shown = if field_limit > 0 {
                    truncate_value(&formatted, field_limit)
                } else {
                    first_line(&formatted).to_string()
                };
                format!("{}: {}", key, shown)
            }
        }
    }

    /// Lines nested under this one.
    ///
    /// A task node lists its own fields first, then its child nodes. Keys in
    /// `ignored_keys` are dropped at every depth.
    pub fn children(&self, ignored_keys: &BTreeSet<String>) -> Vec<Renderable<'a>> {
        match *self {
            Renderable::Node(node) => {
                let mut children = node
                    .task()
                    .map(|task| fields(task.fields(), ignored_keys))
                    .unwrap_or_default();
                children.extend(node.children().into_iter().map(Renderable::Node));
                children
            }
            Renderable::Field { value, .. } => value
                .as_mapping()
                .map(|map| fields(map, ignored_keys))
                .unwrap_or_default(),
        }
    }
}

fn fields<'a>(map: &'a FieldMap, ignored_keys: &BTreeSet<String>) -> Vec<Renderable<'a>> {
    map.iter()
        .filter(|(key, _)| !ignored_keys.contains(*key))
        .map(|(key, value)| Renderable::Field { key, value })
        .collect()
}

fn first_line(value: &str) -> &str {
    value.split('\n').next().unwrap_or_default()
}
