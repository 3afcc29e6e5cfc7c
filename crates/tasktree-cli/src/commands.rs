use super::args::Cli;
use crate::config::{Config, resolve_config_path};
use crate::filters::select_filter;
use crate::loader::{self, Source};
use crate::logging;
use crate::presentation::{RenderOptions, render_task_nodes};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::{self, Write};
use tasktree_engine::{TaskFilter, Tree};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = match resolve_config_path(cli.config.as_deref()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load_from(&path)?
        }
        None => Config::default(),
    };
    let options = resolve_options(&cli, &config)?;
    let human_readable = !cli.raw && config.human_readable();

    let filters = cli
        .select
        .iter()
        .map(|expr| select_filter(expr))
        .collect::<Result<Vec<TaskFilter>>>()?;

    let sources = Source::from_paths(&cli.files);
    let tasks = loader::load_tasks(&sources, human_readable)?;

    let mut tree = Tree::new();
    let matches = tree
        .merge_tasks(tasks, &filters)
        .context("Failed to build task tree")?;
    let selection = combine_selection(&cli.task_uuids, matches);
    let nodes = tree.nodes(selection.as_ref())?;
    tracing::debug!(
        tasks = tree.len(),
        selected = nodes.len(),
        "task tree ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_task_nodes(&mut out, nodes, &options)?;
    out.flush()?;
    Ok(())
}

/// Config file values overridden by command-line flags.
fn resolve_options(cli: &Cli, config: &Config) -> Result<RenderOptions> {
    let mut options = config.render_options()?;

    if let Some(limit) = cli.field_limit {
        options.field_limit = limit;
    }
    if !cli.ignored_task_keys.is_empty() {
        options.ignored_keys = Some(cli.ignored_task_keys.iter().cloned().collect());
    }
    if let Some(encoding) = cli.encoding {
        options.encoding = encoding;
    }

    Ok(options)
}

/// Tasks named with `--task-uuid` intersected with those matched by
/// `--select`; `None` when neither was given.
fn combine_selection(
    task_uuids: &[String],
    matches: Option<BTreeSet<String>>,
) -> Option<BTreeSet<String>> {
    let requested: Option<BTreeSet<String>> = if task_uuids.is_empty() {
        None
    } else {
        Some(task_uuids.iter().cloned().collect())
    };

    match (requested, matches) {
        (Some(requested), Some(matches)) => {
            Some(requested.intersection(&matches).cloned().collect())
        }
        (requested, matches) => requested.or(matches),
    }
}
