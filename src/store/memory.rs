use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::TaskStore;
use crate::task::Task;

/// In-memory task store for tests and local runs.
#[derive(Default)]
pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn put(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.lock().unwrap();
        // Same semantics as the real store: upsert by id.
        tasks.retain(|existing| existing.id != task.id);
        tasks.push(task.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.lock().unwrap().clone())
    }
}
