use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Task, TaskMap};
use crate::store::TaskStore;

pub fn run<S: TaskStore>(store: &mut S, description: String) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    let id = next_id(&tasks);
    let task = Task::new(id, description);
    tasks.insert(id, task.clone());
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task added: {}",
        task.description
    )));
    Ok(result.with_affected_tasks(vec![task]))
}

// Highest present id plus one. Never hands out an id still in use, even
// after deletes in the middle of the map.
fn next_id(tasks: &TaskMap) -> u64 {
    tasks.keys().next_back().copied().unwrap_or(0) + 1
}
