use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{self, Status};
use crate::store::TaskStore;

use super::helpers::take_task;

pub fn mark_in_progress<S: TaskStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    set_status(store, id, Status::InProgress)
}

pub fn mark_done<S: TaskStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    set_status(store, id, Status::Done)
}

fn set_status<S: TaskStore>(store: &mut S, id: &str, status: Status) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    let (key, mut task) = take_task(&mut tasks, id)?;
    task.status = status;
    task.updated_at = model::now_stamp();
    tasks.insert(key, task.clone());
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task with ID {} marked as {}.",
        task.id, status
    )));
    Ok(result.with_affected_tasks(vec![task]))
}
