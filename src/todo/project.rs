use super::todo_item::{Todo, new_id};
use serde::{Deserialize, Serialize};

/// Name of the project created when no persisted state exists
pub const DEFAULT_PROJECT_NAME: &str = "Default";

/// A named, ordered collection of todos
///
/// Todos keep insertion order; nothing here sorts them by date or priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl Project {
    /// Create an empty project with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// The single "Default" project used when there is nothing to load
    pub fn default_project() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }

    /// Check if this is the conventional "Default" project
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_PROJECT_NAME
    }

    /// Append a todo to the end of the list
    ///
    /// No duplicate-ID check is done; callers pass freshly created todos.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Remove a todo by ID
    ///
    /// # Returns
    /// The removed todo, or `None` if no todo had that ID
    pub fn remove_todo(&mut self, todo_id: &str) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == todo_id)?;
        Some(self.todos.remove(pos))
    }

    /// Find a todo by its ID
    pub fn find_todo(&self, todo_id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }

    /// Find a todo by its ID and return a mutable reference
    pub fn find_todo_mut(&mut self, todo_id: &str) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == todo_id)
    }

    /// Number of todos not yet completed
    pub fn open_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }
}
