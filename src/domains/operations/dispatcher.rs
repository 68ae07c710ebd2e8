//! Operation dispatcher.
//!
//! Resolves `(name, arguments)` against the static catalog and issues exactly
//! one upstream call. Shared by both front ends; holds no mutable state.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use rmcp::model::JsonObject;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{Operation, OperationError, catalog};
use crate::domains::upstream::Upstream;

/// Name of the pseudo-operation used for label/file downloads.
const DOWNLOAD_FILE: &str = "download_file";

pub struct Dispatcher {
    upstream: Arc<dyn Upstream>,
    index: HashMap<&'static str, &'static Operation>,
}

impl Dispatcher {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        let index = catalog::all().map(|op| (op.name, op)).collect();
        Self { upstream, index }
    }

    /// Operations in catalog order.
    pub fn operations(&self) -> impl Iterator<Item = &'static Operation> {
        catalog::all()
    }

    pub fn lookup(&self, name: &str) -> Result<&'static Operation, OperationError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| OperationError::unknown(name))
    }

    /// Run one operation and return the upstream JSON unchanged.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<Value, OperationError> {
        let operation = match self.lookup(name) {
            Ok(op) => op,
            Err(e) => {
                warn!("Rejected unknown operation");
                return Err(e);
            }
        };

        let request = operation.prepare(arguments)?;
        info!(verb = %request.verb, path = %request.path(), "Dispatching to ShipStation");

        let result = self
            .upstream
            .send(request)
            .await
            .map_err(|e| OperationError::upstream(operation.name, e))?;

        debug!("Operation completed");
        Ok(result)
    }

    /// Fetch a label or form from the downloads endpoint.
    #[instrument(skip(self))]
    pub async fn download_file(
        &self,
        path: &str,
        rotation: Option<&str>,
    ) -> Result<Bytes, OperationError> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Err(OperationError::validation(
                DOWNLOAD_FILE,
                "a file path is required",
            ));
        }

        let bytes = self
            .upstream
            .download(path, rotation.filter(|r| !r.is_empty()))
            .await
            .map_err(|e| OperationError::upstream(DOWNLOAD_FILE, e))?;

        debug!(size = bytes.len(), "Download completed");
        Ok(bytes)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("operations", &self.index.len())
            .finish_non_exhaustive()
    }
}
