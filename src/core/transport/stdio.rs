//! STDIO transport implementation.
//!
//! Serves the operation catalog as MCP tools over stdin/stdout. Logs go to
//! stderr so the protocol stream stays clean.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::GatewayServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects.
    pub async fn run(server: GatewayServer) -> TransportResult<()> {
        info!(
            "Ready - {} v{} serving {} tools via stdin/stdout",
            server.name(),
            server.version(),
            server.tool_count()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
