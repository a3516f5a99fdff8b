use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One to-do item. The identifier is assigned at creation and never changes;
/// the stored document keeps the same field names as the JSON wire format.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub task: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

impl Task {
    pub fn new(task: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            task,
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new("buy milk".to_string());
        assert_eq!(task.task, "buy milk");
        assert!(!task.is_completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn new_tasks_get_distinct_ids() {
        let a = Task::new("one".to_string());
        let b = Task::new("one".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let task = Task::new("buy milk".to_string());
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["_id"], task.id.as_str());
        assert_eq!(value["task"], "buy milk");
        assert_eq!(value["isCompleted"], false);
    }

    #[test]
    fn deserializes_documents_missing_the_flag() {
        let task: Task =
            serde_json::from_str(r#"{"_id": "abc", "task": "old document"}"#).unwrap();
        assert!(!task.is_completed);
    }
}
