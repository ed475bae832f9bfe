//! Stdio transport entry point for the catalog MCP server
//!
//! The server owns stdout for the MCP stream and blocks until the
//! client disconnects; anything worth saying goes to the tracing
//! subscriber (stderr).

use rmcp::serve_server;
use rmcp::transport::io::stdio;

use crate::catalog::{CatalogError, Result};

use super::server::CatalogServer;

/// Serve the catalog tools over stdio until the client disconnects.
pub async fn run_stdio_server(server: CatalogServer) -> Result<()> {
    tracing::info!("starting catalog MCP server in stdio mode");

    let service = serve_server(server, stdio())
        .await
        .map_err(|e| CatalogError::Other {
            message: format!("failed to start stdio server: {e}"),
        })?;

    tracing::info!("MCP stdio server started");
    match service.waiting().await {
        Ok(reason) => tracing::info!("MCP stdio server completed: {:?}", reason),
        Err(e) => tracing::error!("MCP stdio server task error: {}", e),
    }

    Ok(())
}
