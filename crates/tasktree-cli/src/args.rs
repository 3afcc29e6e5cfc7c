use crate::presentation::OutputEncoding;
use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasktree")]
#[command(about = "Render Eliot-style task logs as ASCII trees", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Log files to read, one JSON message per line (stdin when omitted or '-')")]
    pub files: Vec<PathBuf>,

    #[arg(
        short = 'u',
        long = "task-uuid",
        value_name = "UUID",
        help = "Only render the task with this UUID (repeatable)"
    )]
    pub task_uuids: Vec<String>,

    #[arg(
        short = 'i',
        long = "ignore-task-key",
        value_name = "KEY",
        help = "Hide this field key at every depth, replacing the default set (repeatable)"
    )]
    pub ignored_task_keys: Vec<String>,

    #[arg(
        long,
        value_name = "KEY=VALUE",
        help = "Only render tasks with a message whose field KEY equals VALUE (repeatable)"
    )]
    pub select: Vec<String>,

    #[arg(long, help = "Do not convert numeric timestamps to ISO-8601")]
    pub raw: bool,

    #[arg(
        short = 'l',
        long,
        value_name = "LENGTH",
        help = "Truncate field values longer than LENGTH characters, 0 disables [default: 100]"
    )]
    pub field_limit: Option<usize>,

    #[arg(long, value_name = "NAME", help = "Output encoding: utf-8, ascii or latin-1")]
    pub encoding: Option<OutputEncoding>,

    #[arg(long, value_name = "PATH", help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
