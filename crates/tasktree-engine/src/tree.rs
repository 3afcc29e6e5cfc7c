use crate::{Error, Result, TaskNode};
use std::collections::{BTreeMap, BTreeSet};
use tasktree_types::{FieldValue, TIMESTAMP, Task};

/// Predicate deciding whether a message is of interest.
pub type TaskFilter = Box<dyn Fn(&Task) -> bool>;

/// Forest of task trees, one structural node per task UUID.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: BTreeMap<String, TaskNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Merge messages into the tree.
    ///
    /// Returns `None` when no filters are given. Otherwise returns the UUIDs
    /// of the tasks in which every filter matched at least one message; the
    /// result can be passed to [`Tree::nodes`].
    pub fn merge_tasks<I>(
        &mut self,
        tasks: I,
        filters: &[TaskFilter],
    ) -> Result<Option<BTreeSet<String>>>
    where
        I: IntoIterator<Item = Task>,
    {
        let mut matches = vec![BTreeSet::new(); filters.len()];
        let mut merged = 0usize;

        for task in tasks {
            let key = task.task_uuid()?.to_string();
            for (filter, matched) in filters.iter().zip(matches.iter_mut()) {
                if filter(&task) {
                    matched.insert(key.clone());
                }
            }

            let child = TaskNode::from_task(task)?;
            self.nodes
                .entry(key.clone())
                .or_insert_with(|| TaskNode::root(key))
                .add_child(child)?;
            merged += 1;
        }

        tracing::debug!(messages = merged, tasks = self.nodes.len(), "merged messages");

        let mut sets = matches.into_iter();
        let Some(first) = sets.next() else {
            return Ok(None);
        };
        Ok(Some(sets.fold(first, |acc, set| {
            acc.intersection(&set).cloned().collect()
        })))
    }

    /// Top-level `(uuid, node)` pairs, ordered by the timestamp of each
    /// node's first message.
    ///
    /// With a selection, only the named tasks are returned; unknown UUIDs are
    /// skipped.
    pub fn nodes(&self, selection: Option<&BTreeSet<String>>) -> Result<Vec<(&str, &TaskNode)>> {
        let mut keyed = Vec::with_capacity(self.nodes.len());
        for (uuid, node) in &self.nodes {
            if selection.is_some_and(|s| !s.contains(uuid)) {
                continue;
            }
            keyed.push((first_timestamp(uuid, node)?, uuid.as_str(), node));
        }

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(keyed
            .into_iter()
            .map(|(_, uuid, node)| (uuid, node))
            .collect())
    }
}

fn first_timestamp(uuid: &str, node: &TaskNode) -> Result<f64> {
    let task = node
        .first_child()
        .and_then(TaskNode::task)
        .ok_or_else(|| Error::EmptyTask(uuid.to_string()))?;

    match task.timestamp() {
        Some(value) => value.epoch_seconds().ok_or_else(|| {
            Error::Task(tasktree_types::Error::InvalidField {
                key: TIMESTAMP,
                reason: format!("expected a number or timestamp, found {}", describe(value)),
            })
        }),
        None => Err(Error::Task(tasktree_types::Error::MissingField(TIMESTAMP))),
    }
}

fn describe(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::Timestamp(_) => "a timestamp",
        FieldValue::Text(_) => "text",
        FieldValue::Bytes(_) => "bytes",
        FieldValue::Mapping(_) => "a mapping",
        FieldValue::Other(_) => "a non-numeric value",
    }
}
