//! MCP server implementation exposing the university registry as tools.

use std::{fmt::Display, str::FromStr};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool_handler,
};
use serde::Serialize;
use serde_json::{Value, json};
use university_core::RegistryError;

use crate::state::ServerState;

/// MCP server backed by an in-memory university registry.
#[derive(Clone)]
pub struct UniversityServer {
    /// Shared registry state.
    pub(crate) state: ServerState,
    /// Generated router containing all exposed tools.
    pub(crate) tool_router: ToolRouter<Self>,
}

impl UniversityServer {
    /// Create a new server with the provided state.
    #[must_use]
    pub fn new(state: ServerState) -> Self {
        Self {
            state,
            tool_router: Self::build_tool_router(),
        }
    }

    pub(crate) fn serialize<T: Serialize>(value: T, context: &str) -> Result<Value, McpError> {
        serde_json::to_value(value).map_err(|error| {
            McpError::internal_error(
                "failed to serialize response",
                Some(json!({ "context": context, "reason": error.to_string() })),
            )
        })
    }

    /// Parse an entity identifier supplied by the client.
    pub(crate) fn parse_id<T>(raw: &str, field: &str) -> Result<T, McpError>
    where
        T: FromStr,
        T::Err: Display,
    {
        raw.parse().map_err(|error: T::Err| {
            McpError::invalid_params(
                format!("invalid `{field}` provided"),
                Some(json!({ "field": field, "value": raw, "reason": error.to_string() })),
            )
        })
    }

    /// Reject a request whose payload failed validation.
    pub(crate) fn invalid(message: &str, reason: impl Display) -> McpError {
        McpError::invalid_params(
            message.to_string(),
            Some(json!({ "code": "invalid_input", "reason": reason.to_string() })),
        )
    }

    /// Map a registry failure onto the MCP error tiers.
    ///
    /// Unknown identifiers become `resource_not_found`; every other failure is
    /// a client error.
    pub(crate) fn registry_error(error: &RegistryError) -> McpError {
        let data = Some(json!({ "code": error.code(), "reason": error.to_string() }));
        if error.is_not_found() {
            McpError::resource_not_found(error.to_string(), data)
        } else {
            McpError::invalid_params(error.to_string(), data)
        }
    }

    pub(crate) fn not_found(what: &str, id: impl Display) -> McpError {
        McpError::resource_not_found(
            format!("{what} not found"),
            Some(json!({ "code": format!("{what}_not_found"), "id": id.to_string() })),
        )
    }

    pub(crate) fn success(summary: impl Into<String>, data: Value) -> CallToolResult {
        CallToolResult {
            content: vec![Content::text(summary.into())],
            structured_content: Some(data),
            is_error: Some(false),
            meta: None,
        }
    }
}

#[tool_handler]
impl ServerHandler for UniversityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(format!(
                "Academic records for {}. Create students, teachers and courses, then use \
                 enroll_student, assign_teacher, record_attendance and assign_grade. Identifiers \
                 are UUIDs returned by the create_* tools.",
                self.state.name
            )),
            ..ServerInfo::default()
        }
    }
}
