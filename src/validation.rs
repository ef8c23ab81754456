//! Input gating for the MCP presentation layer
//!
//! The state manager stores whatever it is given, so tool arguments are
//! checked here before any mutation runs.

use crate::todo::Priority;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a priority parameter
///
/// # Arguments
/// * `priority_str` - One of "low", "medium", "high" (case-insensitive)
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str.parse::<Priority>().map_err(invalid_params)
}

/// Parse and validate a due date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// The date re-formatted as YYYY-MM-DD, ready to store
pub fn parse_due_date(date_str: &str) -> McpResult<String> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| {
            invalid_params(format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ))
        })
}

/// Trim a project name and reject blank ones
pub fn normalize_project_name(name: &str) -> McpResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(invalid_params(
            "Project name must not be empty or whitespace".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Reject a blank todo title
pub fn require_title(title: &str) -> McpResult<()> {
    if title.trim().is_empty() {
        return Err(invalid_params("Todo title must not be empty".to_string()));
    }
    Ok(())
}

/// Normalize an ID argument by trimming surrounding whitespace
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}
