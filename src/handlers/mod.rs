//! MCP tool handlers for the todo server
//!
//! Each handler gates its input, calls one state-manager operation, and
//! renders the redraw the operation asked for.

pub mod project;
pub mod todo;
