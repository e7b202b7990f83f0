use serde::{Deserialize, Serialize};

/// A task as returned by the tasks endpoint.
///
/// Only the attributes this tool renders are decoded; everything else in the
/// response object is ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Task {
    pub content: String,

    /// Urgency from 1 (lowest) to 4 (highest).
    ///
    /// The endpoint omits the field for tasks that were never prioritized,
    /// which counts as the lowest urgency.
    #[serde(default = "priority_fallback")]
    pub priority: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
}

/// Due date of a task, a `YYYY-MM-DD` calendar date string.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Due {
    pub date: String,
}

fn priority_fallback() -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_task_with_due_date() {
        let json = r#"{"content":"Pay rent","priority":4,"due":{"date":"2026-08-07","is_recurring":true}}"#;

        let task: Task = serde_json::from_str(json).expect("task should decode");

        assert_eq!(
            task,
            Task {
                content: "Pay rent".to_string(),
                priority: 4,
                due: Some(Due {
                    date: "2026-08-07".to_string()
                }),
            }
        );
    }

    #[test]
    fn test_decode_task_without_due_date() {
        let json = r#"{"content":"Read a book","priority":2,"id":12345}"#;

        let task: Task = serde_json::from_str(json).expect("task should decode");

        assert_eq!(task.content, "Read a book");
        assert_eq!(task.priority, 2);
        assert_eq!(task.due, None);
    }

    #[test]
    fn test_decode_task_without_priority_falls_back_to_lowest() {
        let json = r#"{"content":"Water plants"}"#;

        let task: Task = serde_json::from_str(json).expect("task should decode");

        assert_eq!(task.priority, 1);
    }

    #[test]
    fn test_decode_task_array() {
        let json = r#"[{"content":"A","priority":1},{"content":"B","priority":3,"due":{"date":"2026-08-10"}}]"#;

        let tasks: Vec<Task> = serde_json::from_str(json).expect("tasks should decode");

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].due.as_ref().map(|due| due.date.as_str()), Some("2026-08-10"));
    }
}
