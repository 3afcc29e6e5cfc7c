use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tasktree_types::Task;

/// Where messages are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Sources for the given paths; no paths, or `-`, means stdin.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Source> {
        if paths.is_empty() {
            return vec![Source::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_os_str() == "-" {
                    Source::Stdin
                } else {
                    Source::File(p.clone())
                }
            })
            .collect()
    }

    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Read every message from every source, in order.
pub fn load_tasks(sources: &[Source], human_readable: bool) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    for source in sources {
        let name = source.display_name();
        let before = tasks.len();
        match source {
            Source::Stdin => {
                let stdin = io::stdin();
                tasks.extend(read_tasks(stdin.lock(), &name, human_readable)?);
            }
            Source::File(path) => {
                tasks.extend(read_tasks(open(path)?, &name, human_readable)?);
            }
        }
        tracing::debug!(source = %name, messages = tasks.len() - before, "read messages");
    }
    Ok(tasks)
}

/// Parse JSON-lines input; blank lines are skipped.
pub fn read_tasks<R: BufRead>(reader: R, name: &str, human_readable: bool) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", name))?;
        if line.trim().is_empty() {
            continue;
        }

        let task = Task::from_json_str(&line)
            .with_context(|| format!("{}:{}: invalid message", name, index + 1))?;
        tasks.push(if human_readable {
            task.with_human_readable_timestamp()
        } else {
            task
        });
    }
    Ok(tasks)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktree_types::FieldValue;

    #[test]
    fn test_sources_default_to_stdin() {
        assert_eq!(Source::from_paths(&[]), vec![Source::Stdin]);
        assert_eq!(
            Source::from_paths(&[PathBuf::from("-"), PathBuf::from("a.log")]),
            vec![Source::Stdin, Source::File(PathBuf::from("a.log"))]
        );
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let input = "{\"timestamp\": 0, \"task_uuid\": \"u\"}\n\n   \n{\"task_uuid\": \"v\"}\n";
        let tasks = read_tasks(input.as_bytes(), "test", true).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(matches!(tasks[0].timestamp(), Some(FieldValue::Timestamp(_))));
    }

    #[test]
    fn test_raw_keeps_numeric_timestamp() {
        let tasks = read_tasks("{\"timestamp\": 0}".as_bytes(), "test", false).unwrap();
        assert!(matches!(tasks[0].timestamp(), Some(FieldValue::Other(_))));
    }

    #[test]
    fn test_bad_line_reports_position() {
        let input = "{\"task_uuid\": \"u\"}\n[1, 2]\n";
        let err = read_tasks(input.as_bytes(), "app.log", true).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("app.log:2: invalid message"), "{}", message);
        assert!(message.contains("Expected a JSON object, found a list"));
    }
}
