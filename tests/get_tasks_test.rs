use anyhow::bail;
use async_trait::async_trait;
use serde_json::{Value, json};

use taskcast::classifier::mock::MockClassifier;
use taskcast::handlers;
use taskcast::store::TaskStore;
use taskcast::store::memory::MemoryStore;
use taskcast::task::Task;

struct FailingStore;

#[async_trait]
impl TaskStore for FailingStore {
    async fn put(&self, _task: &Task) -> anyhow::Result<()> {
        bail!("put is not under test")
    }

    async fn scan(&self) -> anyhow::Result<Vec<Task>> {
        bail!("connection reset by peer")
    }
}

#[tokio::test]
async fn empty_store_lists_as_empty_array() {
    let store = MemoryStore::new();

    let response = handlers::list::handle(&store).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn lists_everything_previously_created() {
    let classifier = MockClassifier::new(vec![
        Ok("travel".to_string()),
        Ok("study".to_string()),
    ]);
    let store = MemoryStore::new();

    for description in ["book flights to Lisbon", "revise chapter four"] {
        let event = json!({ "body": json!({ "description": description }).to_string() });
        let created = handlers::create::handle(&event, &classifier, &store).await;
        assert_eq!(created.status_code, 200);
    }

    let response = handlers::list::handle(&store).await;
    assert_eq!(response.status_code, 200);

    let tasks: Vec<Value> = serde_json::from_str(&response.body).unwrap();
    assert_eq!(tasks.len(), 2);

    let mut descriptions: Vec<&str> = tasks
        .iter()
        .map(|task| task["description"].as_str().unwrap())
        .collect();
    descriptions.sort_unstable();
    assert_eq!(
        descriptions,
        ["book flights to Lisbon", "revise chapter four"]
    );
    assert!(tasks.iter().all(|task| task["id"].is_string()));
    assert!(tasks.iter().all(|task| task["createdAt"].is_string()));
}

#[tokio::test]
async fn records_come_back_unmodified() {
    let store = MemoryStore::new();
    let task = Task::new("renew passport", "travel");
    store.put(&task).await.unwrap();

    let response = handlers::list::handle(&store).await;
    let listed: Vec<Task> = serde_json::from_str(&response.body).unwrap();

    assert_eq!(listed, vec![task]);
}

#[tokio::test]
async fn store_failure_returns_generic_error_only() {
    let response = handlers::list::handle(&FailingStore).await;

    assert_eq!(response.status_code, 500);
    // The underlying cause must not leak to the caller.
    assert_eq!(
        serde_json::from_str::<Value>(&response.body).unwrap(),
        json!({ "error": "Internal Server Error" })
    );
}
