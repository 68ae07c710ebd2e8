//! ShipStation API Gateway
//!
//! Exposes the ShipStation v2 REST API through two interchangeable front
//! ends that share one dispatcher and one upstream client:
//!
//! - **MCP tools over stdio**: one tool per catalog operation
//! - **REST over HTTP**: conventional routes mapped onto the same operations
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**
//!   - **upstream**: the authenticated ShipStation client
//!   - **operations**: the operation catalog, argument shaping and dispatch
//!   - **rest**: the REST route table and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use shipstation_gateway::Config;
//!
//! #[tokio::main]
//! async fn main() -> shipstation_gateway::Result<()> {
//!     let config = Config::from_env()?;
//!     shipstation_gateway::run(config).await
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, GatewayServer, Result, run};
