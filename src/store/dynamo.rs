use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use uuid::Uuid;

use super::TaskStore;
use crate::task::Task;

/// DynamoDB-backed task store. One table, `id` as the partition key, all
/// attributes stored as strings under the wire field names.
pub struct DynamoStore {
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table: String) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl TaskStore for DynamoStore {
    async fn put(&self, task: &Task) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(to_item(task)))
            .send()
            .await
            .with_context(|| format!("failed to write task to table {}", self.table))?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Task>> {
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table)
            .into_paginator()
            .items()
            .send();

        let mut tasks = Vec::new();
        while let Some(item) = pages.next().await {
            let item =
                item.with_context(|| format!("failed to scan table {}", self.table))?;
            tasks.push(from_item(&item)?);
        }
        Ok(tasks)
    }
}

fn to_item(task: &Task) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(task.id.to_string())),
        (
            "description".to_string(),
            AttributeValue::S(task.description.clone()),
        ),
        (
            "category".to_string(),
            AttributeValue::S(task.category.clone()),
        ),
        (
            "createdAt".to_string(),
            AttributeValue::S(task.created_at.clone()),
        ),
    ])
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Task> {
    Ok(Task {
        id: string_attr(item, "id")?
            .parse::<Uuid>()
            .context("item has a non-UUID id")?,
        description: string_attr(item, "description")?,
        category: string_attr(item, "category")?,
        created_at: string_attr(item, "createdAt")?,
    })
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| anyhow!("item is missing string attribute `{name}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_conversion_preserves_fields() {
        let task = Task::new("file the expense report", "work");
        let restored = from_item(&to_item(&task)).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn item_missing_attribute_fails() {
        let task = Task::new("water the plants", "personal");
        let mut item = to_item(&task);
        item.remove("category");

        let err = from_item(&item).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn item_with_non_uuid_id_fails() {
        let task = Task::new("water the plants", "personal");
        let mut item = to_item(&task);
        item.insert("id".to_string(), AttributeValue::S("not-a-uuid".into()));

        assert!(from_item(&item).is_err());
    }
}
