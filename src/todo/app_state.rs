use super::project::Project;
use super::todo_item::{Priority, Todo};
use crate::storage::KeyValueStore;
use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Key under which the whole project collection is persisted
pub const STORAGE_KEY: &str = "todoApp";

/// What the presentation layer needs to re-render after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Project list and todo list
    All,
    /// Only the current project's todo list
    Todos,
}

/// Field values submitted from an add/edit todo form
///
/// A present, non-empty `todo_id` means "edit that todo"; otherwise a new
/// todo is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub todo_id: Option<String>,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub notes: String,
}

/// Read the persisted project collection from `store`
///
/// Never fails: a missing key, an unreadable store, or a value that does not
/// decode to a valid project list all yield a single empty "Default" project.
pub fn load_projects(store: &impl KeyValueStore) -> Vec<Project> {
    let raw = match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved state found, starting with the default project");
            return vec![Project::default_project()];
        }
        Err(e) => {
            warn!(error = %e, "Failed to read saved state, resetting to the default project");
            return vec![Project::default_project()];
        }
    };

    let projects = match serde_json::from_str::<Vec<Project>>(&raw) {
        Ok(projects) => projects,
        Err(e) => {
            warn!(error = %e, "Error loading data, resetting to the default project");
            return vec![Project::default_project()];
        }
    };

    if let Err(e) = validate_ids(&projects) {
        warn!(error = %e, "Saved state is inconsistent, resetting to the default project");
        return vec![Project::default_project()];
    }

    debug!(count = projects.len(), "Loaded project(s)");
    projects
}

/// Check that project IDs are unique, and todo IDs are unique per project
fn validate_ids(projects: &[Project]) -> Result<()> {
    let mut project_ids = HashSet::new();
    for project in projects {
        if !project_ids.insert(project.id.as_str()) {
            anyhow::bail!("duplicate project id '{}'", project.id);
        }
        let mut todo_ids = HashSet::new();
        for todo in &project.todos {
            if !todo_ids.insert(todo.id.as_str()) {
                anyhow::bail!(
                    "duplicate todo id '{}' in project '{}'",
                    todo.id,
                    project.id
                );
            }
        }
    }
    Ok(())
}

/// Application state: all projects plus the current selection
///
/// Every mutation is a complete read-modify-persist cycle: it changes the
/// in-memory projects, writes the full snapshot to the store, and returns the
/// [`Redraw`] the presentation layer should perform.
pub struct TodoApp<S: KeyValueStore> {
    projects: Vec<Project>,
    current_project_id: Option<String>,
    store: S,
}

impl<S: KeyValueStore> TodoApp<S> {
    /// Load state from `store`, selecting the first project
    pub fn new(store: S) -> Self {
        let projects = load_projects(&store);
        let current_project_id = projects.first().map(|p| p.id.clone());
        Self {
            projects,
            current_project_id,
            store,
        }
    }

    /// Write the full project collection to the store, replacing prior contents
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.projects).context("Failed to serialize projects")?;
        self.store
            .set_item(STORAGE_KEY, &json)
            .context("Failed to save projects")?;
        debug!(count = self.projects.len(), "Saved project(s)");
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_project_id(&self) -> Option<&str> {
        self.current_project_id.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Find a project by its ID
    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// The project currently selected, if the selection points at one
    pub fn current_project(&self) -> Option<&Project> {
        let id = self.current_project_id.as_deref()?;
        self.find_project(id)
    }

    fn current_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.current_project_id.as_deref()?;
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Select a project
    ///
    /// The ID is not checked; callers pass IDs taken from [`Self::projects`].
    pub fn switch_project(&mut self, project_id: &str) -> Redraw {
        self.current_project_id = Some(project_id.to_string());
        Redraw::All
    }

    /// Create a project at the end of the list
    ///
    /// When nothing is selected, the new project becomes current.
    ///
    /// # Returns
    /// The new project's ID and the redraw hint
    pub fn add_project(&mut self, name: &str) -> Result<(String, Redraw)> {
        let project = Project::new(name);
        let id = project.id.clone();
        self.projects.push(project);
        if self.current_project_id.is_none() {
            self.current_project_id = Some(id.clone());
        }
        self.save()?;
        info!(project_id = %id, name, "Added project");
        Ok((id, Redraw::All))
    }

    /// Delete a project
    ///
    /// If it was the current project, the selection moves to the first
    /// remaining project, or to none when the list is empty. Deleting an
    /// unknown ID changes nothing but still persists.
    pub fn delete_project(&mut self, project_id: &str) -> Result<Redraw> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != project_id);
        if self.projects.len() != before {
            info!(project_id, "Deleted project");
        }

        if self.current_project_id.as_deref() == Some(project_id) {
            self.current_project_id = self.projects.first().map(|p| p.id.clone());
        }

        self.save()?;
        Ok(Redraw::All)
    }

    /// Create a todo in the current project
    ///
    /// # Returns
    /// The new todo's ID, or `None` if there is no current project
    pub fn add_todo(
        &mut self,
        title: &str,
        description: &str,
        due_date: &str,
        priority: Priority,
        notes: &str,
    ) -> Result<(Option<String>, Redraw)> {
        let id = match self.current_project_mut() {
            Some(project) => {
                let todo = Todo::new(title, description, due_date, priority, notes);
                let id = todo.id.clone();
                project.add_todo(todo);
                Some(id)
            }
            None => {
                debug!("No current project, todo not added");
                None
            }
        };

        self.save()?;
        Ok((id, Redraw::Todos))
    }

    /// Overwrite a todo in the current project
    ///
    /// A todo ID not found in the current project is silently ignored.
    pub fn edit_todo(
        &mut self,
        todo_id: &str,
        title: &str,
        description: &str,
        due_date: &str,
        priority: Priority,
        notes: &str,
    ) -> Result<Redraw> {
        if let Some(todo) = self
            .current_project_mut()
            .and_then(|p| p.find_todo_mut(todo_id))
        {
            todo.edit(title, description, due_date, priority, notes);
        }

        self.save()?;
        Ok(Redraw::Todos)
    }

    /// Apply an add/edit form submission to the current project
    pub fn submit_todo(&mut self, form: &TodoForm) -> Result<Redraw> {
        match form.todo_id.as_deref().filter(|id| !id.is_empty()) {
            Some(todo_id) => self.edit_todo(
                todo_id,
                &form.title,
                &form.description,
                &form.due_date,
                form.priority,
                &form.notes,
            ),
            None => {
                let (_, redraw) = self.add_todo(
                    &form.title,
                    &form.description,
                    &form.due_date,
                    form.priority,
                    &form.notes,
                )?;
                Ok(redraw)
            }
        }
    }

    /// Remove a todo from the current project; unknown IDs are ignored
    pub fn delete_todo(&mut self, todo_id: &str) -> Result<Redraw> {
        if let Some(project) = self.current_project_mut() {
            project.remove_todo(todo_id);
        }

        self.save()?;
        Ok(Redraw::Todos)
    }

    /// Flip a todo's completion flag in the current project; unknown IDs are ignored
    pub fn toggle_todo(&mut self, todo_id: &str) -> Result<Redraw> {
        if let Some(todo) = self
            .current_project_mut()
            .and_then(|p| p.find_todo_mut(todo_id))
        {
            todo.toggle_complete();
        }

        self.save()?;
        Ok(Redraw::Todos)
    }
}
