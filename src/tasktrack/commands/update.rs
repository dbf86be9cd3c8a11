use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model;
use crate::store::TaskStore;

use super::helpers::take_task;

pub fn run<S: TaskStore>(store: &mut S, id: &str, description: String) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    let (key, mut task) = take_task(&mut tasks, id)?;
    task.description = description;
    task.updated_at = model::now_stamp();
    tasks.insert(key, task.clone());
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task updated: {}",
        task.description
    )));
    Ok(result.with_affected_tasks(vec![task]))
}
