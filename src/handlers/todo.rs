//! Todo handlers for the todo MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::{Priority, Redraw, TodoForm};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Renders the current project's todos.
    pub async fn handle_list_todos(&self) -> McpResult<String> {
        let app = self.lock_app();
        Ok(formatting::render(&*app, Redraw::Todos))
    }

    /// Validates form fields and adds a todo to the current project.
    pub async fn handle_add_todo(
        &self,
        title: String,
        due_date: String,
        priority: String,
        description: Option<String>,
        notes: Option<String>,
    ) -> McpResult<String> {
        validation::require_title(&title)?;
        let due_date = validation::parse_due_date(&due_date)?;
        let priority = validation::parse_priority(&priority)?;

        let mut app = self.lock_app();
        if app.current_project().is_none() {
            drop(app);
            bail_public!(
                _,
                "No project selected. Use switch_project() or add_project() first."
            );
        }

        let result = app.add_todo(
            &title,
            description.as_deref().unwrap_or_default(),
            &due_date,
            priority,
            notes.as_deref().unwrap_or_default(),
        );
        let (id, redraw) = match result {
            Ok(r) => r,
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        let view = formatting::render(&*app, redraw);
        match id {
            Some(id) => Ok(format!("Todo created with ID: {}\n\n{}", id, view)),
            None => Ok(view),
        }
    }

    /// Edits a todo in the current project.
    ///
    /// Omitted fields keep their current value, like an edit form pre-filled
    /// from the todo. An unknown ID changes nothing.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_edit_todo(
        &self,
        id: String,
        title: Option<String>,
        due_date: Option<String>,
        priority: Option<String>,
        description: Option<String>,
        notes: Option<String>,
    ) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        if let Some(ref t) = title {
            validation::require_title(t)?;
        }
        let due_date = due_date
            .as_deref()
            .map(validation::parse_due_date)
            .transpose()?;
        let priority = priority
            .as_deref()
            .map(validation::parse_priority)
            .transpose()?;

        let mut app = self.lock_app();

        let existing = app.current_project().and_then(|p| p.find_todo(&id)).cloned();
        let found = existing.is_some();
        let result = match existing {
            Some(existing) => app.submit_todo(&TodoForm {
                todo_id: Some(id.clone()),
                title: title.unwrap_or(existing.title),
                description: description.unwrap_or(existing.description),
                due_date: due_date.unwrap_or(existing.due_date),
                priority: priority.unwrap_or(existing.priority),
                notes: notes.unwrap_or(existing.notes),
            }),
            // The state manager ignores unknown IDs but still saves
            None => app.edit_todo(&id, "", "", "", Priority::default(), ""),
        };

        let redraw = match result {
            Ok(redraw) => redraw,
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        let view = formatting::render(&*app, redraw);
        if found {
            Ok(format!("Todo {} updated successfully\n\n{}", id, view))
        } else {
            Ok(view)
        }
    }

    /// Deletes a todo from the current project.
    pub async fn handle_delete_todo(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let mut app = self.lock_app();

        let redraw = match app.delete_todo(&id) {
            Ok(redraw) => redraw,
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        Ok(formatting::render(&*app, redraw))
    }

    /// Flips the completion flag of a todo in the current project.
    pub async fn handle_toggle_todo(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let mut app = self.lock_app();

        let redraw = match app.toggle_todo(&id) {
            Ok(redraw) => redraw,
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        Ok(formatting::render(&*app, redraw))
    }
}
