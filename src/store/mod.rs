pub mod dynamo;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::task::Task;

/// Where task records live. Could be DynamoDB or an in-memory test double.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Unconditional upsert keyed by the task id. No existence check.
    async fn put(&self, task: &Task) -> Result<()>;

    /// Full scan of every record. No ordering guarantee.
    async fn scan(&self) -> Result<Vec<Task>>;
}
