pub mod huggingface;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

/// Candidate set sent with every classification request. Fixed on purpose:
/// callers name tasks, not taxonomies.
pub const CANDIDATE_LABELS: [&str; 7] = [
    "work",
    "personal",
    "shopping",
    "study",
    "finance",
    "health",
    "travel",
];

/// Category recorded when the model gives us nothing usable.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Assigns a category to a task description. Could be a hosted model or a
/// test script.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Returns the winning label, or [`UNCATEGORIZED`] when the response
    /// carries no usable ranking. An `Err` means the call itself failed
    /// (network, timeout, non-2xx).
    async fn classify(&self, description: &str) -> Result<String>;
}
