//! Upstream domain module.
//!
//! Everything that talks to the ShipStation v2 REST API lives here:
//!
//! - `endpoints` - one constant per upstream resource/action
//! - `client` - the `reqwest` based [`ShipStationClient`]
//! - `error` - failure normalization ([`UpstreamError`])
//!
//! The rest of the crate only sees the [`Upstream`] trait, so the dispatcher
//! and both front ends can be exercised against an in-memory fake.

mod client;
pub mod endpoints;
mod error;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

pub use client::{API_KEY_HEADER, API_VERSION, ShipStationClient};
pub use endpoints::{Endpoint, Verb};
pub use error::{UpstreamError, UpstreamResult};

/// A fully resolved upstream call: verb, path segments under `/v2`, query
/// pairs and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub verb: Verb,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl UpstreamRequest {
    /// The path relative to the API version root, e.g. `/shipments/se-1`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// The single seam between the gateway and ShipStation.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Issue exactly one request and return the parsed 2xx body.
    async fn send(&self, request: UpstreamRequest) -> UpstreamResult<Value>;

    /// Fetch a file from the downloads endpoint as raw bytes.
    async fn download(&self, path: &str, rotation: Option<&str>) -> UpstreamResult<Bytes>;
}
