//! Catalog read tools
//!
//! Read-oriented tools against the Backstage catalog API. Every tool
//! issues a single HTTP request through the shared executor and
//! normalizes the JSON response into readable text; failures of any
//! kind collapse into a fixed sentence rather than an error object.
//!
//! ## Available Tools
//!
//! - **list**: list entities, optionally filtered by kind and namespace
//! - **get**: look up a single entity by kind/namespace/name
//! - **ancestry**: walk the ancestry chain of an entity

pub mod ancestry;
pub mod get;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all catalog read tools with the registry
pub fn register_catalog_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListEntitiesTool::new());
    registry.register(get::GetEntityTool::new());
    registry.register(ancestry::GetEntityAncestryTool::new());
}
