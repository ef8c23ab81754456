//! Todo Projects MCP Server Library
//!
//! This library provides a project-based todo list: todos with a title,
//! description, due date, priority and notes, grouped into named projects and
//! persisted as a single JSON snapshot in a local key/value store.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - presentation layer over MCP (stdio)
//! - **Domain Layer**: `todo` module - `Todo`, `Project` and the `TodoApp` state manager
//! - **Persistence Layer**: `storage` module - `KeyValueStore` with file and in-memory stores
//!
//! # Example
//!
//! ```no_run
//! use todo_projects::{MemoryStore, Priority, TodoApp};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut app = TodoApp::new(MemoryStore::new());
//!     app.add_todo("Buy milk", "", "2024-01-01", Priority::Low, "")?;
//!     Ok(())
//! }
//! ```

pub mod formatting;
pub mod handlers;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

// Re-export commonly used types
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use todo::{
    DEFAULT_PROJECT_NAME, Priority, Project, Redraw, STORAGE_KEY, Todo, TodoApp, TodoForm,
};

/// MCP Server handler for project-based todo lists
///
/// Owns the single application state for the lifetime of the process. Every
/// tool call runs a full read-modify-persist cycle under the lock.
pub struct TodoServerHandler {
    pub(crate) app: Mutex<TodoApp<FileStore>>,
}

impl TodoServerHandler {
    /// Create a new handler storing its data under `data_dir`
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding `todoApp.json`; created on first save
    ///
    /// # Example
    /// ```no_run
    /// # use todo_projects::TodoServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TodoServerHandler::new("./todo-data")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        if data_dir.exists() && !data_dir.is_dir() {
            anyhow::bail!("Data path {} is not a directory", data_dir.display());
        }

        let app = TodoApp::new(FileStore::new(data_dir));
        info!(
            data_dir = %data_dir.display(),
            projects = app.projects().len(),
            "Loaded todo data"
        );
        Ok(Self {
            app: Mutex::new(app),
        })
    }

    /// Lock the application state
    ///
    /// Poisoned locks are recovered.
    pub(crate) fn lock_app(&self) -> MutexGuard<'_, TodoApp<FileStore>> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current application state
    pub fn with_app<T>(&self, f: impl FnOnce(&TodoApp<FileStore>) -> T) -> T {
        f(&*self.lock_app())
    }
}

/// Project-based todo list manager.
///
/// Todos live in named projects; one project is "current" and all todo tools act on it.
/// Each todo has a title, description, due date (YYYY-MM-DD), priority (low/medium/high),
/// notes, and a completion flag. Every change is saved immediately.
///
/// Workflow: list_projects → switch_project/add_project → add_todo → toggle_todo/edit_todo/delete_todo.
/// The "Default" project cannot be deleted via delete_project.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Overview**: List all projects (current marked with *) and the current project's todos.
    #[tool]
    async fn list_projects(&self) -> McpResult<String> {
        self.handle_list_projects().await
    }

    /// **Select**: Make a project current. All todo tools act on the current project.
    #[tool]
    async fn switch_project(
        &self,
        /// Project ID from list_projects
        id: String,
    ) -> McpResult<String> {
        self.handle_switch_project(id).await
    }

    /// **Create project**: Add a named project to the end of the list.
    #[tool]
    async fn add_project(
        &self,
        /// Project name (must not be blank)
        name: String,
    ) -> McpResult<String> {
        self.handle_add_project(name).await
    }

    /// **Delete project**: Remove a project and all its todos. The "Default" project is protected.
    /// If the current project is deleted, the first remaining project becomes current.
    #[tool]
    async fn delete_project(
        &self,
        /// Project ID from list_projects
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_project(id).await
    }

    /// **Review**: List the current project's todos in the order they were added.
    #[tool]
    async fn list_todos(&self) -> McpResult<String> {
        self.handle_list_todos().await
    }

    /// **Capture**: Add a todo to the current project.
    #[tool]
    async fn add_todo(
        &self,
        /// Title: brief description
        title: String,
        /// Due date: YYYY-MM-DD
        due_date: String,
        /// Priority: low/medium/high
        priority: String,
        /// Description (optional)
        description: Option<String>,
        /// Notes (optional)
        notes: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_todo(title, due_date, priority, description, notes)
            .await
    }

    /// **Edit**: Update a todo in the current project. Omitted fields keep their value.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn edit_todo(
        &self,
        /// Todo ID from list_todos
        id: String,
        /// New title (optional)
        title: Option<String>,
        /// New due date YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// New priority low/medium/high (optional)
        priority: Option<String>,
        /// New description, ""=clear (optional)
        description: Option<String>,
        /// New notes, ""=clear (optional)
        notes: Option<String>,
    ) -> McpResult<String> {
        self.handle_edit_todo(id, title, due_date, priority, description, notes)
            .await
    }

    /// **Delete**: Remove a todo from the current project.
    #[tool]
    async fn delete_todo(
        &self,
        /// Todo ID from list_todos
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_todo(id).await
    }

    /// **Complete**: Toggle a todo between done and not done.
    #[tool]
    async fn toggle_todo(
        &self,
        /// Todo ID from list_todos
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_todo(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn get_test_handler() -> (TodoServerHandler, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let handler = TodoServerHandler::new(temp_dir.path()).unwrap();
        (handler, temp_dir)
    }

    #[test]
    fn test_new_rejects_file_path() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        assert!(TodoServerHandler::new(temp_file.path()).is_err());
    }

    #[tokio::test]
    async fn test_add_project_and_todo() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add_project("Work".to_string())
            .await
            .unwrap();
        assert!(result.contains("Project created with ID: "));

        let result = handler
            .handle_add_todo(
                "Write report".to_string(),
                "2024-05-01".to_string(),
                "high".to_string(),
                None,
                None,
            )
            .await
            .unwrap();
        assert!(result.contains("Write report"));

        let listing = handler.handle_list_projects().await.unwrap();
        assert!(listing.contains("Default"));
        assert!(listing.contains("Work"));
    }

    #[tokio::test]
    async fn test_state_survives_handler_restart() {
        let (handler, temp_dir) = get_test_handler();
        handler
            .handle_add_todo(
                "Buy milk".to_string(),
                "2024-01-01".to_string(),
                "low".to_string(),
                None,
                None,
            )
            .await
            .unwrap();
        drop(handler);

        let handler2 = TodoServerHandler::new(temp_dir.path()).unwrap();
        let titles = handler2.with_app(|app| {
            app.current_project()
                .unwrap()
                .todos
                .iter()
                .map(|t| t.title.clone())
                .collect::<Vec<_>>()
        });
        assert_eq!(titles, vec!["Buy milk".to_string()]);
    }
}
