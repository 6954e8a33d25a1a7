use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::{ApiResponse, GENERIC_ERROR};
use crate::classifier::Classifier;
use crate::store::TaskStore;
use crate::task::Task;

#[derive(Deserialize)]
struct CreateRequest {
    #[serde(default)]
    description: Option<String>,
}

/// Classify the description from the event body, record the task,
/// return the record.
///
/// Never returns an error: every failure becomes a structured response.
pub async fn handle(
    event: &Value,
    classifier: &dyn Classifier,
    store: &dyn TaskStore,
) -> ApiResponse {
    // Proxy events carry the request body as a JSON string; an absent
    // body reads as an empty request.
    let body = event.get("body").and_then(Value::as_str).unwrap_or("{}");

    let request: CreateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            error!(error = %err, "request body is not valid JSON");
            return ApiResponse::error(500, &err.to_string());
        }
    };

    let Some(description) = request.description.filter(|d| !d.is_empty()) else {
        return ApiResponse::error(400, "description is required");
    };

    match create(&description, classifier, store).await {
        Ok(task) => ApiResponse::ok(&task),
        Err(err) => {
            error!(error = %err, "failed to create task");
            ApiResponse::error(500, &error_message(&err))
        }
    }
}

async fn create(
    description: &str,
    classifier: &dyn Classifier,
    store: &dyn TaskStore,
) -> Result<Task> {
    let category = classifier.classify(description).await?;
    debug!(category = %category, "classified task");

    // The write is the last step, so a classification failure leaves
    // nothing behind to clean up.
    let task = Task::new(description, category);
    store.put(&task).await?;
    Ok(task)
}

/// Upstream error bodies ride in the error's display string; an empty
/// message falls back to the generic one.
fn error_message(err: &anyhow::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        message
    }
}
