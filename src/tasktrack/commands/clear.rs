use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::store::TaskStore;
use std::io::{self, BufRead, Write};

/// Empty the store. Unless `force` is set, a confirmation is read from
/// `input` first; anything but "yes" aborts without touching the store.
/// The input source is injected so tests can supply canned answers.
pub fn run<S: TaskStore, R: BufRead>(store: &mut S, input: &mut R, force: bool) -> Result<CmdResult> {
    if !force {
        print!("Are you sure you want to delete all tasks? (yes/no): ");
        io::stdout().flush().map_err(TaskError::Io)?;

        let mut answer = String::new();
        input.read_line(&mut answer).map_err(TaskError::Io)?;

        if !answer.trim().eq_ignore_ascii_case("yes") {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Clear operation cancelled."));
            return Ok(result);
        }
    }

    let mut tasks = store.load()?;
    tasks.clear();
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All tasks cleared."));
    Ok(result)
}
