use crate::error::join_level;
use crate::{Error, Result};
use tasktree_types::Task;

/// Compute the display name of a message.
///
/// Plain messages are named `{message_type}@{level}/None`, action markers
/// `{action_type}@{level}/{action_status}`, with the level joined by `,`.
pub fn task_name(task: &Task) -> Result<String> {
    let level = join_level(&task.task_level()?);
    if let Some(message_type) = task.message_type() {
        return Ok(format!("{}@{}/None", message_type, level));
    }
    Ok(format!(
        "{}@{}/{}",
        task.action_type()?,
        level,
        task.action_status()?
    ))
}

/// A node in the causal task tree.
///
/// Top-level nodes are structural: they carry no message and are named after
/// the task UUID. Every other node wraps exactly one message.
#[derive(Debug, Clone)]
pub struct TaskNode {
    task: Option<Task>,
    name: String,
    level: Vec<u64>,
    // Keyed by a single level component, in insertion order.
    children: Vec<(u64, TaskNode)>,
}

impl TaskNode {
    /// Structural node for a whole task.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            task: None,
            name: name.into(),
            level: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Node for a single message; the name is derived from the message.
    pub fn from_task(task: Task) -> Result<Self> {
        let name = task_name(&task)?;
        Self::named(name, task)
    }

    /// Node for a single message with an explicit name.
    pub fn named(name: impl Into<String>, task: Task) -> Result<Self> {
        let level = task.task_level()?;
        Ok(Self {
            task: Some(task),
            name: name.into(),
            level,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    pub fn level(&self) -> &[u64] {
        &self.level
    }

    /// Add a message node below this one.
    ///
    /// The node's level is walked one component at a time: while a child is
    /// already registered under the current component, descend into it;
    /// the first unregistered component is where the node lands. A node can
    /// therefore end up as a grandchild.
    pub fn add_child(&mut self, node: TaskNode) -> Result<()> {
        let levels = node.level.clone();
        insert(self, &levels, node)
    }

    /// First child by insertion order.
    pub fn first_child(&self) -> Option<&TaskNode> {
        self.children.first().map(|(_, child)| child)
    }

    /// Child nodes ordered by their full task level.
    pub fn children(&self) -> Vec<&TaskNode> {
        let mut children: Vec<&TaskNode> = self.children.iter().map(|(_, c)| c).collect();
        children.sort_by(|a, b| a.level.cmp(&b.level));
        children
    }
}

fn insert(parent: &mut TaskNode, levels: &[u64], node: TaskNode) -> Result<()> {
    let Some((&key, rest)) = levels.split_first() else {
        let task_uuid = node
            .task
            .as_ref()
            .and_then(|t| t.task_uuid().ok())
            .unwrap_or_default()
            .to_string();
        return Err(Error::DuplicateTaskLevel {
            task_uuid,
            level: node.level,
        });
    };

    match parent.children.iter().position(|(k, _)| *k == key) {
        Some(idx) => insert(&mut parent.children[idx].1, rest, node),
        None => {
            parent.children.push((key, node));
            Ok(())
        }
    }
}
