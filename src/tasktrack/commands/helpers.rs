use crate::error::{Result, TaskError};
use crate::model::{Task, TaskMap};

/// Remove the task addressed by a raw id argument, returning its key and
/// record. Callers re-insert after mutating; `delete` simply doesn't.
/// A non-numeric id is indistinguishable from an absent one.
pub(super) fn take_task(tasks: &mut TaskMap, id: &str) -> Result<(u64, Task)> {
    id.parse::<u64>()
        .ok()
        .and_then(|key| tasks.remove(&key).map(|task| (key, task)))
        .ok_or_else(|| TaskError::TaskNotFound(id.to_string()))
}
