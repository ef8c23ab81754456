//! Text rendering of application state for MCP responses
//!
//! This is the "redraw" side of the presentation layer: after each mutation
//! the handler re-reads state and renders the part named by [`Redraw`].

use crate::storage::KeyValueStore;
use crate::todo::{Project, Redraw, Todo, TodoApp};

/// Render the project list, marking the current project with `*`
pub fn format_projects(projects: &[Project], current_id: Option<&str>) -> String {
    if projects.is_empty() {
        return "No projects. Use add_project to create one.".to_string();
    }

    let mut result = format!("Projects ({}):\n", projects.len());
    for project in projects {
        let marker = if Some(project.id.as_str()) == current_id {
            "*"
        } else {
            " "
        };
        result.push_str(&format!(
            "{} [{}] {} ({} open / {} total)\n",
            marker,
            project.id,
            project.name,
            project.open_count(),
            project.todos.len()
        ));
    }
    result
}

fn format_todo(todo: &Todo) -> String {
    let check = if todo.completed { "x" } else { " " };
    let mut line = format!(
        "- [{}] [{}] {}\n  Due: {}  Priority: {}\n",
        check, todo.id, todo.title, todo.due_date, todo.priority
    );
    if !todo.description.is_empty() {
        line.push_str(&format!("  Description: {}\n", todo.description));
    }
    if !todo.notes.is_empty() {
        line.push_str(&format!("  Notes: {}\n", todo.notes));
    }
    line
}

/// Render one project's todos in insertion order
pub fn format_todos(project: &Project) -> String {
    let mut result = format!("Project: {}\n", project.name);
    if project.todos.is_empty() {
        result.push_str("No todos yet. Use add_todo to create one!\n");
        return result;
    }

    for todo in &project.todos {
        result.push_str(&format_todo(todo));
    }
    result
}

/// Render whatever a mutation asked to be redrawn
pub fn render<S: KeyValueStore>(app: &TodoApp<S>, redraw: Redraw) -> String {
    let todos = match app.current_project() {
        Some(project) => format_todos(project),
        None => "No project selected.\n".to_string(),
    };

    match redraw {
        Redraw::Todos => todos,
        Redraw::All => format!(
            "{}\n{}",
            format_projects(app.projects(), app.current_project_id()),
            todos
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Priority;

    #[test]
    fn test_format_projects_marks_current() {
        let a = Project::new("A");
        let b = Project::new("B");
        let out = format_projects(&[a.clone(), b.clone()], Some(&b.id));

        assert!(out.contains(&format!("  [{}] A", a.id)));
        assert!(out.contains(&format!("* [{}] B", b.id)));
    }

    #[test]
    fn test_format_todos_empty_and_filled() {
        let mut project = Project::new("Home");
        assert!(format_todos(&project).contains("No todos yet"));

        let mut todo = Todo::new("Buy milk", "", "2024-01-01", Priority::Low, "2%");
        todo.toggle_complete();
        project.add_todo(todo);

        let out = format_todos(&project);
        assert!(out.contains("- [x]"));
        assert!(out.contains("Buy milk"));
        assert!(out.contains("Due: 2024-01-01  Priority: low"));
        assert!(out.contains("Notes: 2%"));
        assert!(!out.contains("Description:"));
    }

    #[test]
    fn test_format_projects_empty() {
        assert!(format_projects(&[], None).contains("No projects"));
    }
}
