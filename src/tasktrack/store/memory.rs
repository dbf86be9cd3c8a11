use super::TaskStore;
use crate::error::Result;
use crate::model::TaskMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: TaskMap,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<TaskMap> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &TaskMap) -> Result<()> {
        self.tasks = tasks.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Status, Task};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            let mut tasks = self.store.load().unwrap();
            for _ in 0..count {
                let id = tasks.keys().next_back().copied().unwrap_or(0) + 1;
                tasks.insert(id, Task::new(id, format!("Test task {}", id)));
            }
            self.store.save(&tasks).unwrap();
            self
        }

        pub fn with_task(mut self, description: &str) -> Self {
            let mut tasks = self.store.load().unwrap();
            let id = tasks.keys().next_back().copied().unwrap_or(0) + 1;
            tasks.insert(id, Task::new(id, description.to_string()));
            self.store.save(&tasks).unwrap();
            self
        }

        pub fn with_done_task(mut self, description: &str) -> Self {
            let mut tasks = self.store.load().unwrap();
            let id = tasks.keys().next_back().copied().unwrap_or(0) + 1;
            let mut task = Task::new(id, description.to_string());
            task.status = Status::Done;
            tasks.insert(id, task);
            self.store.save(&tasks).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Status;

    #[test]
    fn save_then_load_returns_same_map() {
        let mut store = InMemoryStore::new();
        let mut tasks = TaskMap::new();
        tasks.insert(1, crate::model::Task::new(1, "A".into()));
        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn fixtures_allocate_sequential_ids() {
        let fixture = StoreFixture::default()
            .with_tasks(2)
            .with_task("Active")
            .with_done_task("Finished");

        let tasks = fixture.store.load().unwrap();
        assert_eq!(tasks.len(), 4);
        assert_eq!(
            tasks.keys().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(tasks[&4].status, Status::Done);
    }
}
