//! Project handlers for the todo MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::Redraw;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Renders all projects plus the current project's todos.
    pub async fn handle_list_projects(&self) -> McpResult<String> {
        let app = self.lock_app();
        Ok(formatting::render(&*app, Redraw::All))
    }

    /// Selects a project. Only IDs from the project list are accepted.
    pub async fn handle_switch_project(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let mut app = self.lock_app();

        if app.find_project(&id).is_none() {
            drop(app);
            bail_public!(
                _,
                "Project not found: '{}' does not exist. Use list_projects() to see available projects.",
                id
            );
        }

        let redraw = app.switch_project(&id);
        Ok(formatting::render(&*app, redraw))
    }

    /// Creates a project from a trimmed, non-blank name.
    pub async fn handle_add_project(&self, name: String) -> McpResult<String> {
        let name = validation::normalize_project_name(&name)?;
        let mut app = self.lock_app();

        let (id, redraw) = match app.add_project(&name) {
            Ok(result) => result,
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        Ok(format!(
            "Project created with ID: {}\n\n{}",
            id,
            formatting::render(&*app, redraw)
        ))
    }

    /// Deletes a project. The "Default" project is protected here, not in the state manager.
    pub async fn handle_delete_project(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_id(&id);
        let mut app = self.lock_app();

        let existed = match app.find_project(&id).map(|p| p.is_default()) {
            Some(true) => {
                drop(app);
                bail_public!(_, "The Default project cannot be deleted.");
            }
            Some(false) => true,
            None => false,
        };

        let redraw = match app.delete_project(&id) {
            Ok(redraw) => redraw,
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {:#}", e);
            }
        };

        let view = formatting::render(&*app, redraw);
        if existed {
            Ok(format!("Project {} deleted\n\n{}", id, view))
        } else {
            Ok(view)
        }
    }
}
