//! Tool manifest route handler.

use axum::Json;
use serde::Serialize;

use crate::tools::{TOOLS, ToolDescriptor};

/// Body of `GET /tools`.
#[derive(Debug, Serialize)]
pub struct ToolManifest {
    /// Path of the GraphQL endpoint the operations run against.
    pub endpoint: &'static str,
    pub tools: &'static [ToolDescriptor],
}

/// Serve the tool manifest.
pub async fn tools() -> Json<ToolManifest> {
    Json(ToolManifest {
        endpoint: "/graphql",
        tools: TOOLS,
    })
}
