//! Shared server state for the MCP server.

use std::sync::Arc;

use tokio::sync::RwLock;
use university_core::{Config, University};

/// Shared state for the MCP server.
///
/// The registry is wrapped in `Arc<RwLock>` so that cross-entity operations
/// (enroll, assign teacher) run under a single coarse write lock.
#[derive(Clone)]
pub struct ServerState {
    /// The registry of students, teachers and courses.
    pub university: Arc<RwLock<University>>,
    /// Display name of the university, fixed at startup.
    pub name: Arc<str>,
}

impl ServerState {
    /// Create a new server state holding an empty registry.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let name = Arc::from(config.name());
        Self {
            university: Arc::new(RwLock::new(University::with_config(config))),
            name,
        }
    }
}
