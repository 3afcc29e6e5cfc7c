//! Custom assertions for rendered task trees.
//!
//! Provides high-level assertions that make tests more readable:
//! - Presence of a label at a given tree depth
//! - Absence of a field key anywhere in the output

use anyhow::Result;

/// Depth of a rendered line: the number of four-column connector groups
/// before its label.
pub fn line_depth(line: &str) -> usize {
    let prefix_len = line
        .char_indices()
        .find(|(_, c)| !matches!(c, '│' | '├' | '└' | '─' | ' ' | '|' | '`' | '-'))
        .map(|(i, _)| line[..i].chars().count())
        .unwrap_or(0);
    prefix_len / 4
}

/// Strip the connector prefix from a rendered line.
pub fn line_label(line: &str) -> &str {
    line.char_indices()
        .find(|(_, c)| !matches!(c, '│' | '├' | '└' | '─' | ' ' | '|' | '`' | '-'))
        .map(|(i, _)| &line[i..])
        .unwrap_or("")
}

/// Assert that a line with exactly `label` exists at `depth`.
pub fn assert_line_at_depth(output: &str, label: &str, depth: usize) -> Result<()> {
    let found = output
        .lines()
        .any(|line| line_label(line) == label && line_depth(line) == depth);

    if !found {
        anyhow::bail!(
            "Expected '{}' at depth {} in output:\n{}",
            label,
            depth,
            output
        );
    }

    Ok(())
}

/// Assert that no rendered field line uses `key`.
pub fn assert_key_absent(output: &str, key: &str) -> Result<()> {
    for line in output.lines() {
        let label = line_label(line);
        if label == key || label.starts_with(&format!("{}: ", key)) {
            anyhow::bail!("Key '{}' should be hidden but was rendered: {}", key, line);
        }
    }

    Ok(())
}
