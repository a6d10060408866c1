//! MCP server for university academic records.
//!
//! This server exposes an in-memory registry of students, teachers and
//! courses as tools using the Model Context Protocol (MCP).

mod server;
mod state;
mod tools;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rmcp::{ServiceExt, transport::stdio};
use server::UniversityServer;
use state::ServerState;
use university_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is reserved for JSON-RPC)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var_os("UNIVERSITY_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading configuration from {}", path.display());
            Config::load(&path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(limit) = config.max_course_capacity() {
        tracing::info!("Course capacity limited to {limit}");
    }

    let state = ServerState::new(config);
    let server = UniversityServer::new(state);

    tracing::info!("Starting MCP server over stdio");
    let service = server.serve(stdio()).await?;
    let quit_reason = service.waiting().await?;
    tracing::info!("Server stopped: {:?}", quit_reason);

    Ok(())
}
