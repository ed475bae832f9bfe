//! Authentication tools for catalog access
//!
//! The catalog may sit behind bearer-token authentication. The only
//! state involved is the process-wide credential store; the tool here
//! replaces its contents at runtime.

pub mod set_token;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all authentication-related tools with the registry
pub fn register_auth_tools(registry: &mut ToolRegistry) {
    registry.register(set_token::SetBearerTokenTool::new());
}
