use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasktrack")]
#[command(about = "File-backed task tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the task store file
    #[arg(long, global = true, default_value = "tasks.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// What the task is about
        description: String,
    },

    /// Update an existing task's description
    Update {
        /// Id of the task
        id: String,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Id of the task
        id: String,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: all, todo, in-progress, or done
        status: Option<String>,
    },

    /// Mark a task as in-progress
    MarkInProgress {
        /// Id of the task
        id: String,
    },

    /// Mark a task as done
    MarkDone {
        /// Id of the task
        id: String,
    },

    /// Delete all tasks
    ClearTasks {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}
