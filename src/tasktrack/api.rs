//! # API Facade
//!
//! A thin facade over the command layer. It serves as the single entry point
//! for all tasktrack operations regardless of the UI on top: it dispatches to
//! the right command, normalizes inputs (filter strings become
//! [`StatusFilter`]s), and returns structured `Result<CmdResult>` values.
//! Business logic stays in `commands/*.rs`; presentation stays in the CLI.
//!
//! `TaskApi<S: TaskStore>` is generic over the storage backend:
//! `TaskApi<FileStore>` in production, `TaskApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::store::TaskStore;
use std::io::BufRead;

/// The main API facade for tasktrack operations.
///
/// Generic over `TaskStore` to allow different storage backends.
pub struct TaskApi<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_task(&mut self, description: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, description)
    }

    pub fn update_task(&mut self, id: &str, description: String) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, description)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// List tasks. `filter` is the raw CLI value; `None` means "all".
    pub fn list_tasks(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        let filter = filter.unwrap_or("all").parse::<StatusFilter>()?;
        commands::list::run(&self.store, filter)
    }

    pub fn mark_in_progress(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::status::mark_in_progress(&mut self.store, id)
    }

    pub fn mark_done(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::status::mark_done(&mut self.store, id)
    }

    pub fn clear_tasks<R: BufRead>(
        &mut self,
        input: &mut R,
        force: bool,
    ) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, input, force)
    }
}

pub use crate::commands::list::StatusFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
