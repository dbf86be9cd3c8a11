use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Timestamp pattern used throughout the store document.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: Status,
    // Timestamps are stored pre-formatted; the document carries strings, not
    // datetimes, and created_at never changes after creation.
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    pub fn new(id: u64, description: String) -> Self {
        let now = now_stamp();
        Self {
            id: id.to_string(),
            description,
            status: Status::Todo,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// All tasks keyed by numeric id. Ids are allocated monotonically, so
/// ascending key order doubles as insertion order. `serde_json` round-trips
/// the integer keys as the string-keyed JSON object the store file uses.
pub type TaskMap = BTreeMap<u64, Task>;

/// Current local time in the store's timestamp format.
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
