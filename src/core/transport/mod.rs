//! Transport layer for the gateway.
//!
//! Two front ends share one [`Dispatcher`](crate::domains::operations::Dispatcher):
//! - **STDIO**: MCP tool protocol over stdin/stdout - feature: `stdio`
//! - **HTTP**: the REST router from `domains::rest` - feature: `http`
//!
//! # Feature Flags
//!
//! - `stdio` (default): STDIO transport - no extra dependencies
//! - `http` (default): HTTP transport - adds axum, tower, tower-http

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
