//! MCP server handler.
//!
//! Exposes every catalog operation as an MCP tool. Tool calls go through the
//! shared [`Dispatcher`]; results come back as pretty-printed JSON text, and
//! failures as error-flagged results so a tool failure never becomes a
//! protocol error.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use tracing::{info, instrument, warn};

use super::config::{Config, ServerConfig};
use super::error;
use super::transport::TransportService;
use crate::domains::operations::Dispatcher;
use crate::domains::upstream::ShipStationClient;

const INSTRUCTIONS: &str = "ShipStation API v2 gateway. Each tool maps to one ShipStation \
operation (shipments, labels, rates, carriers, inventory, batches, manifests, packages, \
pickups, tags, tracking, webhooks, account). Tool results are the raw ShipStation JSON.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct GatewayServer {
    /// Server identification.
    config: Arc<ServerConfig>,

    /// Shared operation dispatcher.
    dispatcher: Arc<Dispatcher>,
}

impl GatewayServer {
    pub fn new(config: ServerConfig, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Build the ShipStation client and dispatcher described by `config`.
    pub fn from_config(config: &Config) -> error::Result<Self> {
        let client = ShipStationClient::from_config(&config.upstream)?;
        info!("Upstream: {}", client.base_url());

        let dispatcher = Arc::new(Dispatcher::new(Arc::new(client)));
        Ok(Self::new(config.server.clone(), dispatcher))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// The dispatcher shared with the REST front end.
    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        self.dispatcher.clone()
    }

    pub fn tool_count(&self) -> usize {
        self.dispatcher.operations().count()
    }

    /// Tool descriptors in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.operations().map(|op| op.to_tool()).collect()
    }

    /// Run one tool and wrap the outcome as a tool result.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let outcome = self
            .dispatcher
            .dispatch(name, arguments.unwrap_or_default())
            .await;

        match outcome {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => CallToolResult::success(vec![Content::text(text)]),
                Err(e) => CallToolResult::error(vec![Content::text(format!("Error: {e}"))]),
            },
            Err(e) => {
                warn!(tool = name, error = %e, "Tool call failed");
                CallToolResult::error(vec![Content::text(format!("Error: {e}"))])
            }
        }
    }
}

/// Build the server and run the configured front end until it stops.
pub async fn run(config: Config) -> error::Result<()> {
    let server = GatewayServer::from_config(&config)?;
    info!("Server initialized with {} operations", server.tool_count());

    TransportService::new(config.transport).run(server).await?;
    Ok(())
}

impl ServerHandler for GatewayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool");
        Ok(self.invoke(&request.name, request.arguments).await)
    }
}
