//! Core module containing shared infrastructure components.
//!
//! Configuration, the crate error type, the MCP server handler and the
//! transport layer that starts either front end.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{GatewayServer, run};
pub use transport::{TransportConfig, TransportService};
