use super::TaskStore;
use crate::error::{Result, TaskError};
use crate::model::TaskMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<TaskMap> {
        if !self.path.exists() {
            return Ok(TaskMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TaskError::Io)?;
        serde_json::from_str(&content).map_err(|source| TaskError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, tasks: &TaskMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TaskError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(tasks).map_err(TaskError::Serialization)?;

        // Write to a sibling temp file and rename, so a reader never sees a
        // half-written document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(TaskError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TaskError::Io)?;
        Ok(())
    }
}
