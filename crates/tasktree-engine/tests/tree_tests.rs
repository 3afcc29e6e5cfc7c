use serde_json::json;
use std::collections::BTreeSet;
use tasktree_engine::{Error, TaskFilter, Tree};
use tasktree_testing::fixtures::{TaskLog, http_request_task};
use tasktree_types::Task;

fn names(tree: &Tree, selection: Option<&BTreeSet<String>>) -> Vec<String> {
    tree.nodes(selection)
        .unwrap()
        .into_iter()
        .map(|(uuid, _)| uuid.to_string())
        .collect()
}

#[test]
fn test_merge_groups_messages_by_task() {
    let log = http_request_task(100.0);
    let mut tree = Tree::new();
    let matches = tree.merge_tasks(log.tasks(), &[]).unwrap();

    assert!(matches.is_none());
    assert_eq!(tree.len(), 1);

    let nodes = tree.nodes(None).unwrap();
    let (uuid, root) = nodes[0];
    assert_eq!(uuid, log.uuid());
    assert_eq!(root.name(), log.uuid());
    assert!(root.task().is_none());

    let children: Vec<_> = root.children().iter().map(|c| c.name().to_string()).collect();
    assert_eq!(
        children,
        vec![
            "app:soap:client:request@1/started",
            "app:soap:client:response@2/None",
            "app:soap:client:request@3/succeeded",
        ]
    );
}

#[test]
fn test_nodes_sorted_by_first_timestamp() {
    let late = TaskLog::with_uuid("late", 300.0).message(&[1], "m", json!({}));
    let early = TaskLog::with_uuid("early", 100.0).message(&[1], "m", json!({}));
    let middle = TaskLog::with_uuid("middle", 200.0).message(&[1], "m", json!({}));

    let mut tree = Tree::new();
    let tasks = [late.tasks(), early.tasks(), middle.tasks()].concat();
    tree.merge_tasks(tasks, &[]).unwrap();

    assert_eq!(names(&tree, None), vec!["early", "middle", "late"]);
}

#[test]
fn test_sorting_works_with_converted_timestamps() {
    let late = TaskLog::with_uuid("late", 300.0).message(&[1], "m", json!({}));
    let early = TaskLog::with_uuid("early", 100.0).message(&[1], "m", json!({}));

    let tasks: Vec<Task> = [late.tasks(), early.tasks()]
        .concat()
        .into_iter()
        .map(Task::with_human_readable_timestamp)
        .collect();
    let mut tree = Tree::new();
    tree.merge_tasks(tasks, &[]).unwrap();

    assert_eq!(names(&tree, None), vec!["early", "late"]);
}

#[test]
fn test_selection_restricts_nodes() {
    let a = TaskLog::with_uuid("a", 1.0).message(&[1], "m", json!({}));
    let b = TaskLog::with_uuid("b", 2.0).message(&[1], "m", json!({}));

    let mut tree = Tree::new();
    tree.merge_tasks([a.tasks(), b.tasks()].concat(), &[]).unwrap();

    let selection: BTreeSet<String> = ["b".to_string(), "unknown".to_string()].into();
    assert_eq!(names(&tree, Some(&selection)), vec!["b"]);

    let empty = BTreeSet::new();
    assert!(names(&tree, Some(&empty)).is_empty());
}

#[test]
fn test_filters_require_every_predicate() {
    let both = TaskLog::with_uuid("both", 1.0)
        .message(&[1], "db:query", json!({}))
        .message(&[2], "http:request", json!({}));
    let one = TaskLog::with_uuid("one", 2.0).message(&[1], "db:query", json!({}));

    let filters: Vec<TaskFilter> = vec![
        Box::new(|t: &Task| t.message_type() == Some("db:query")),
        Box::new(|t: &Task| t.message_type() == Some("http:request")),
    ];

    let mut tree = Tree::new();
    let matches = tree
        .merge_tasks([both.tasks(), one.tasks()].concat(), &filters)
        .unwrap();

    assert_eq!(matches, Some(["both".to_string()].into()));
    // Filters select, they never drop messages from the tree.
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_filters_with_no_matches_select_nothing() {
    let log = TaskLog::with_uuid("a", 1.0).message(&[1], "m", json!({}));
    let filters: Vec<TaskFilter> = vec![Box::new(|_: &Task| false)];

    let mut tree = Tree::new();
    let matches = tree.merge_tasks(log.tasks(), &filters).unwrap();
    assert_eq!(matches, Some(BTreeSet::new()));
}

#[test]
fn test_missing_timestamp_is_an_error() {
    let task = Task::from_json(json!({
        "task_uuid": "u",
        "task_level": [1],
        "message_type": "m",
    }))
    .unwrap();

    let mut tree = Tree::new();
    tree.merge_tasks(vec![task], &[]).unwrap();

    let err = tree.nodes(None).unwrap_err();
    assert!(matches!(err, Error::Task(_)));
    assert_eq!(err.to_string(), "Task error: Missing field: timestamp");
}

#[test]
fn test_message_without_uuid_is_an_error() {
    let task = Task::from_json(json!({"task_level": [1], "message_type": "m"})).unwrap();
    let mut tree = Tree::new();
    assert!(tree.merge_tasks(vec![task], &[]).is_err());
}
