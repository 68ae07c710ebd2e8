//! ShipStation HTTP client.
//!
//! A thin `reqwest` wrapper bound to one base host and one API key. Every
//! call is a single request; non-2xx answers become
//! [`UpstreamError::Status`] and missing answers [`UpstreamError::Transport`].

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, error};

use super::endpoints::DOWNLOADS;
use super::{Upstream, UpstreamError, UpstreamRequest, UpstreamResult};
use crate::core::config::UpstreamConfig;

/// API version prefix every resource path lives under.
pub const API_VERSION: &str = "v2";

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "api-key";

/// Client for the ShipStation v2 API.
#[derive(Debug, Clone)]
pub struct ShipStationClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ShipStationClient {
    /// Build a client for `base_url` authenticating with `api_key`.
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> UpstreamResult<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| UpstreamError::init(format!("invalid API key: {e}")))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::init(e.to_string()))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| UpstreamError::init(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::init(format!(
                "base URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self { http, base_url })
    }

    /// Build a client from the upstream section of the configuration.
    pub fn from_config(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Self::new(&config.api_key, &config.base_url, config.timeout())
    }

    /// The host every request is sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(API_VERSION).extend(segments);
        }
        url
    }

    /// Read the whole body, turning non-2xx answers into errors.
    async fn read_success(response: reqwest::Response) -> UpstreamResult<Bytes> {
        let status = response.status();
        let url = response.url().clone();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(bytes);
        }

        let body = String::from_utf8_lossy(&bytes).into_owned();
        error!(
            status = status.as_u16(),
            url = %url,
            body = %body,
            "ShipStation API error"
        );
        Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Parse a 2xx body: empty is `null`, JSON is kept, anything else is text.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl Upstream for ShipStationClient {
    async fn send(&self, request: UpstreamRequest) -> UpstreamResult<Value> {
        let url = self.url_for(&request.segments);
        debug!("{} {}", request.verb, url);

        let mut builder = self.http.request(request.verb.into(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let bytes = Self::read_success(response).await?;
        Ok(parse_body(&bytes))
    }

    async fn download(&self, path: &str, rotation: Option<&str>) -> UpstreamResult<Bytes> {
        let segments = std::iter::once(DOWNLOADS)
            .chain(path.split('/').filter(|segment| !segment.is_empty()));
        let url = self.url_for(segments);
        debug!("GET {} (download)", url);

        let mut builder = self.http.get(url);
        if let Some(rotation) = rotation {
            builder = builder.query(&[("rotation", rotation)]);
        }

        let response = builder.send().await?;
        Self::read_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::upstream::Verb;
    use axum::{
        Json, Router,
        http::{HeaderMap as AxumHeaders, Method, StatusCode, Uri},
        routing::{any, get},
    };
    use serde_json::json;
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn echo(method: Method, uri: Uri, headers: AxumHeaders, body: Bytes) -> Json<Value> {
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query().unwrap_or(""),
            "api_key": headers.get("api-key").and_then(|v| v.to_str().ok()),
            "body": serde_json::from_slice::<Value>(&body).ok(),
        }))
    }

    async fn spawn_upstream(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn client(base_url: &str) -> ShipStationClient {
        ShipStationClient::new("test-key", base_url, Duration::from_secs(5)).unwrap()
    }

    fn request(verb: Verb, segments: &[&str]) -> UpstreamRequest {
        UpstreamRequest {
            verb,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_send_attaches_key_version_query_and_body() {
        let base = spawn_upstream(Router::new().route("/{*path}", any(echo))).await;
        let mut req = request(Verb::Post, &["shipments"]);
        req.query = vec![("page_size".to_string(), "5".to_string())];
        req.body = Some(json!({ "shipments": [{ "carrier_id": "se-1" }] }));

        let echoed = client(&base).send(req).await.unwrap();

        assert_eq!(echoed["method"], "POST");
        assert_eq!(echoed["path"], "/v2/shipments");
        assert_eq!(echoed["api_key"], "test-key");
        assert_eq!(echoed["body"], json!({ "shipments": [{ "carrier_id": "se-1" }] }));

        let query: HashMap<String, String> =
            serde_urlencoded::from_str(echoed["query"].as_str().unwrap()).unwrap();
        assert_eq!(query.get("page_size").map(String::as_str), Some("5"));
    }

    #[tokio::test]
    async fn test_send_encodes_path_segments() {
        let base = spawn_upstream(Router::new().route("/{*path}", any(echo))).await;
        let req = request(Verb::Delete, &["tags", "needs review"]);

        let echoed = client(&base).send(req).await.unwrap();

        assert_eq!(echoed["method"], "DELETE");
        assert_eq!(echoed["path"], "/v2/tags/needs%20review");
    }

    #[tokio::test]
    async fn test_non_success_becomes_status_error() {
        let app = Router::new().route(
            "/v2/shipments/{id}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "shipment not found" })),
                )
            }),
        );
        let base = spawn_upstream(app).await;

        let err = client(&base)
            .send(request(Verb::Get, &["shipments", "se-404"]))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("shipment not found"));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let app = Router::new().route(
            "/v2/tags/{name}",
            axum::routing::delete(|| async { StatusCode::NO_CONTENT }),
        );
        let base = spawn_upstream(app).await;

        let value = client(&base)
            .send(request(Verb::Delete, &["tags", "rush"]))
            .await
            .unwrap();

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .send(request(Verb::Get, &["carriers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let app = Router::new().route(
            "/v2/carriers",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "carriers": [] }))
            }),
        );
        let base = spawn_upstream(app).await;
        let client =
            ShipStationClient::new("test-key", &base, Duration::from_millis(100)).unwrap();

        let err = client
            .send(request(Verb::Get, &["carriers"]))
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    #[tokio::test]
    async fn test_download_returns_raw_bytes_with_rotation() {
        async fn file(uri: Uri) -> Vec<u8> {
            format!("{}?{}", uri.path(), uri.query().unwrap_or("")).into_bytes()
        }
        let base = spawn_upstream(Router::new().route("/v2/downloads/{*path}", get(file))).await;

        let bytes = client(&base)
            .download("1/abc/label.pdf", Some("90"))
            .await
            .unwrap();

        assert_eq!(&bytes[..], b"/v2/downloads/1/abc/label.pdf?rotation=90");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = ShipStationClient::new("key", "not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, UpstreamError::Init(_)));
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let client = client("https://api.shipstation.com/");
        let url = client.url_for(["carriers", "se-1"]);
        assert_eq!(url.as_str(), "https://api.shipstation.com/v2/carriers/se-1");
    }

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(b""), Value::Null);
        assert_eq!(parse_body(br#"{"ok":true}"#), json!({ "ok": true }));
        assert_eq!(parse_body(b"plain"), json!("plain"));
    }
}
