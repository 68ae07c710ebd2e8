//! In-memory [`Upstream`] used by tests across the crate.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Value, json};

use super::{Upstream, UpstreamRequest, UpstreamResult};

/// Records every request and answers from a queue (default `{"ok": true}`).
#[derive(Default)]
pub(crate) struct FakeUpstream {
    requests: Mutex<Vec<UpstreamRequest>>,
    responses: Mutex<VecDeque<UpstreamResult<Value>>>,
    downloads: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeUpstream {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next `send`.
    pub(crate) fn respond_with(self, result: UpstreamResult<Value>) -> Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn downloads(&self) -> Vec<(String, Option<String>)> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn send(&self, request: UpstreamRequest) -> UpstreamResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "ok": true })))
    }

    async fn download(&self, path: &str, rotation: Option<&str>) -> UpstreamResult<Bytes> {
        self.downloads
            .lock()
            .unwrap()
            .push((path.to_string(), rotation.map(str::to_string)));
        Ok(Bytes::from_static(b"%PDF-1.4 fake"))
    }
}
