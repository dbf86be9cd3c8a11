use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TaskStore;

use super::helpers::take_task;

pub fn run<S: TaskStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    let (_, task) = take_task(&mut tasks, id)?;
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task with ID {} deleted.",
        task.id
    )));
    Ok(result.with_affected_tasks(vec![task]))
}
