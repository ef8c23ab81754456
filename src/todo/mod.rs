//! Todo domain models and application state
//!
//! - `todo_item`: a single todo and its priority
//! - `project`: a named, ordered list of todos
//! - `app_state`: the state manager owning all projects and the current selection

mod app_state;
mod project;
mod todo_item;

pub use app_state::{Redraw, STORAGE_KEY, TodoApp, TodoForm, load_projects};
pub use project::{DEFAULT_PROJECT_NAME, Project};
pub use todo_item::{Priority, Todo, new_id};
