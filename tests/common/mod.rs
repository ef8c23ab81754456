//! Common test utilities for integration tests
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use tempfile::TempDir;
use todo_projects::{FileStore, KeyValueStore, MemoryStore, Priority, TodoApp, TodoServerHandler};

/// Create a test handler with a temporary data directory
pub fn get_test_handler() -> (TodoServerHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = TodoServerHandler::new(temp_dir.path()).unwrap();
    (handler, temp_dir)
}

/// Create an app backed by a fresh file store in a temporary directory
pub fn get_file_app() -> (TodoApp<FileStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let app = TodoApp::new(FileStore::new(temp_dir.path()));
    (app, temp_dir)
}

/// Create an app backed by an empty in-memory store
pub fn get_memory_app() -> TodoApp<MemoryStore> {
    TodoApp::new(MemoryStore::new())
}

/// Add a low-priority todo with only a title, returning its ID
pub fn add_simple_todo(app: &mut TodoApp<impl KeyValueStore>, title: &str) -> String {
    let (id, _) = app
        .add_todo(title, "", "2024-01-01", Priority::Low, "")
        .unwrap();
    id.unwrap()
}

/// A store whose reads and writes always fail
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Err(anyhow!("storage unavailable while reading '{}'", key))
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("storage unavailable while writing '{}'", key))
    }
}

/// Extract an ID from a "... created with ID: <id>" response
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        return id_part
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
    }
    String::new()
}
