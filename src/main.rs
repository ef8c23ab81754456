//! Todo Projects MCP Server - Main Entry Point
//!
//! This is the main entry point for the todo MCP server application.
//! The actual implementation is in the `todo_projects` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_projects::TodoServerHandler;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Todo Projects MCP Server - project-based todo lists via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the todo data
    data_dir: PathBuf,

    /// Log level used when RUST_LOG is unset or invalid (logs go to stderr)
    #[arg(long, env = "TODO_PROJECTS_LOG", default_value = "info")]
    log_level: Level,
}

/// Build the log filter: RUST_LOG directives win, otherwise `default_level`
fn log_filter(rust_log: Option<&str>, default_level: Level) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level.to_string().to_lowercase()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // stdout carries the MCP protocol, so logs must go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), args.log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let handler = TodoServerHandler::new(&args.data_dir)?;
    serve_stdio(handler).await?;
    Ok(())
}
