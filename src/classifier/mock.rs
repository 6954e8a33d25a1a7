use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::Classifier;

/// A scripted classifier for tests. Returns pre-defined outcomes in order;
/// `Err` entries carry the message the real client would surface.
pub struct MockClassifier {
    outcomes: Vec<Result<String, String>>,
    index: AtomicUsize,
}

impl MockClassifier {
    pub fn new(outcomes: Vec<Result<String, String>>) -> Self {
        Self {
            outcomes,
            index: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, _description: &str) -> Result<String> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcomes.get(i).ok_or_else(|| {
            anyhow!("MockClassifier: no more outcomes (called {} times)", i + 1)
        })?;
        outcome.clone().map_err(|message| anyhow!(message))
    }
}
