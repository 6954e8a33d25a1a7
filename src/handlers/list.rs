use tracing::error;

use super::{ApiResponse, GENERIC_ERROR};
use crate::store::TaskStore;

/// Return every recorded task. Order is whatever the store yields.
pub async fn handle(store: &dyn TaskStore) -> ApiResponse {
    match store.scan().await {
        Ok(tasks) => ApiResponse::ok(&tasks),
        Err(err) => {
            // The cause stays in the logs; callers get the generic message.
            error!(error = %err, "failed to scan tasks");
            ApiResponse::error(500, GENERIC_ERROR)
        }
    }
}
