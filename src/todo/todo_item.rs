use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Generate a fresh opaque identifier for a todo or project
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Priority of a todo
///
/// Uses lowercase naming to match the JSON persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

/// A single task record
///
/// Field names are serialized in camelCase (`dueDate`) to match the
/// persisted representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,
    pub title: String,
    pub description: String,
    /// Due date as an ISO 8601 calendar date (YYYY-MM-DD), stored verbatim
    pub due_date: String,
    pub priority: Priority,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo with a fresh ID
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
            notes: notes.into(),
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Overwrite all editable fields in place
    ///
    /// `id` and `completed` are left untouched.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
        notes: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.due_date = due_date.into();
        self.priority = priority;
        self.notes = notes.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_not_completed() {
        let todo = Todo::new("Buy milk", "", "2024-01-01", Priority::Low, "");
        assert!(!todo.completed);
        assert!(!todo.id.is_empty());
        assert_eq!(todo.title, "Buy milk");
    }

    #[test]
    fn test_new_todos_get_distinct_ids() {
        let a = Todo::new("a", "", "2024-01-01", Priority::Low, "");
        let b = Todo::new("b", "", "2024-01-01", Priority::Low, "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut todo = Todo::new("t", "", "2024-01-01", Priority::High, "");
        todo.toggle_complete();
        assert!(todo.completed);
        todo.toggle_complete();
        assert!(!todo.completed);
    }

    #[test]
    fn test_edit_keeps_id_and_completion() {
        let mut todo = Todo::new("old", "d", "2024-01-01", Priority::Low, "n");
        todo.toggle_complete();
        let id = todo.id.clone();

        todo.edit("new", "desc", "2024-02-02", Priority::Medium, "notes");

        assert_eq!(todo.id, id);
        assert!(todo.completed);
        assert_eq!(todo.title, "new");
        assert_eq!(todo.description, "desc");
        assert_eq!(todo.due_date, "2024-02-02");
        assert_eq!(todo.priority, Priority::Medium);
        assert_eq!(todo.notes, "notes");
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_todo_serializes_camel_case() {
        let todo = Todo::new("t", "", "2024-01-01", Priority::Medium, "");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["completed"], false);
    }
}
