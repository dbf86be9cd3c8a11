use crate::commands::CmdResult;
use crate::error::{Result, TaskError};
use crate::model::{Status, Task};
use crate::store::TaskStore;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(StatusFilter::All),
            "todo" => Ok(StatusFilter::Only(Status::Todo)),
            "in-progress" => Ok(StatusFilter::Only(Status::InProgress)),
            "done" => Ok(StatusFilter::Only(Status::Done)),
            other => Err(TaskError::InvalidFilter(other.to_string())),
        }
    }
}

pub fn run<S: TaskStore>(store: &S, filter: StatusFilter) -> Result<CmdResult> {
    let tasks = store.load()?;
    let listed: Vec<Task> = tasks
        .into_values()
        .filter(|task| filter.matches(task))
        .collect();

    Ok(CmdResult::default().with_listed_tasks(listed))
}
