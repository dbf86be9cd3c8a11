use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task with ID {0} not found")]
    TaskNotFound(String),

    #[error("Invalid status filter '{0}'. Use 'all', 'todo', 'in-progress', or 'done'.")]
    InvalidFilter(String),

    #[error("Corrupt task store at {}: {}", .path.display(), .source)]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
