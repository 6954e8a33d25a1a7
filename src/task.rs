use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded task. Created exactly once by the `create_task` handler and
/// never mutated afterwards; `get_tasks` only reads.
///
/// Field names on the wire are camelCase so response bodies and stored
/// items share one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    /// ISO 8601 UTC timestamp, set at creation.
    pub created_at: String,
}

impl Task {
    /// Build a fresh record: new v4 id, current UTC timestamp.
    pub fn new(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            category: category.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        let a = Task::new("pay rent", "finance");
        let b = Task::new("pay rent", "finance");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_wire_field_names() {
        let task = Task::new("book flights to Lisbon", "travel");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn created_at_is_utc_iso8601() {
        let task = Task::new("renew gym membership", "health");
        assert!(task.created_at.ends_with('Z'));
        chrono::DateTime::parse_from_rfc3339(&task.created_at).unwrap();
    }
}
