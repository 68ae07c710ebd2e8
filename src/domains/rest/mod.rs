//! REST domain module.
//!
//! Maps verb + path onto catalog operations:
//!
//! - `routes` - the static route table, grouped by resource
//! - `handlers` - argument binding, download, health and 404 handlers
//! - `error` - [`ApiError`], the `{error, timestamp, path}` response
//! - `docs` - the `GET /` documentation map
//! - `security_headers` - response hardening middleware

mod docs;
mod error;
mod handlers;
pub mod routes;
mod security_headers;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use chrono::{SecondsFormat, Utc};

use crate::domains::operations::Dispatcher;

pub use error::ApiError;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the REST router over a shared dispatcher.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    let mut router = Router::new()
        .route("/", get(docs::index))
        .route("/health", get(handlers::health))
        .route("/api/download/{*path}", get(handlers::download));

    for route in routes::all() {
        router = router.route(route.path, handlers::method_router(route));
    }

    router
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(security_headers::apply))
        .with_state(dispatcher)
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::upstream::fake::FakeUpstream;
    use crate::domains::upstream::{UpstreamError, Verb};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(fake: FakeUpstream) -> (Router, Arc<FakeUpstream>) {
        let fake = Arc::new(fake);
        (router(Arc::new(Dispatcher::new(fake.clone()))), fake)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upstream_404_keeps_status() {
        let fake = FakeUpstream::new().respond_with(Err(UpstreamError::Status {
            status: 404,
            body: r#"{"message":"Shipment not found"}"#.to_string(),
        }));
        let (app, _) = app(fake);

        let (status, body) = send(app, get_request("/api/shipments/se-missing")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("404"));
        assert_eq!(body["path"], "/api/shipments/se-missing");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_create_shipment_end_to_end() {
        let upstream_body = json!({ "shipments": [{ "shipment_id": "se-1" }], "has_errors": false });
        let fake = FakeUpstream::new().respond_with(Ok(upstream_body.clone()));
        let (app, fake) = app(fake);

        let shipment = json!({
            "ship_to": { "name": "A" },
            "ship_from": { "name": "B" },
            "packages": []
        });
        let (status, body) = send(app, json_request("POST", "/api/shipments", shipment.clone())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, upstream_body);

        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].verb, Verb::Post);
        assert_eq!(requests[0].path(), "/shipments");
        assert_eq!(requests[0].body, Some(json!({ "shipments": [shipment] })));
    }

    #[tokio::test]
    async fn test_list_forwards_query() {
        let (app, fake) = app(FakeUpstream::new());

        let (status, _) = send(app, get_request("/api/carriers?page_size=5&page=2")).await;

        assert_eq!(status, StatusCode::OK);
        let mut query = fake.requests()[0].query.clone();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("page_size".to_string(), "5".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancel_uses_upstream_post() {
        let (app, fake) = app(FakeUpstream::new());
        let request = Request::builder()
            .method("PUT")
            .uri("/api/shipments/se-5/cancel")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fake.requests()[0].verb, Verb::Post);
        assert_eq!(fake.requests()[0].path(), "/shipments/se-5/cancel");
    }

    #[tokio::test]
    async fn test_malformed_json_is_server_error() {
        let (app, fake) = app(FakeUpstream::new());
        let request = Request::builder()
            .method("POST")
            .uri("/api/labels/shipment/se-1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("malformed JSON body"));
        assert_eq!(body["path"], "/api/labels/shipment/se-1");
        assert!(body["timestamp"].is_string());
        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_server_error() {
        let (app, fake) = app(FakeUpstream::new());

        let (status, body) = send(
            app,
            json_request("POST", "/api/shipments:bulk", json!({ "shipments": [] })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("create_shipments_bulk"));
        assert_eq!(body["path"], "/api/shipments:bulk");
        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_create_and_lookup_do_not_collide() {
        let (app, fake) = app(FakeUpstream::new());
        let shipments = json!({ "shipments": [{ "ship_to": { "name": "A" } }] });

        let (status, _) = send(
            app.clone(),
            json_request("POST", "/api/shipments:bulk", shipments.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(app, get_request("/api/shipments/bulk")).await;
        assert_eq!(status, StatusCode::OK);

        let requests = fake.requests();
        assert_eq!(requests[0].path(), "/shipments");
        assert_eq!(requests[0].body, Some(shipments));
        assert_eq!(requests[1].verb, Verb::Get);
        assert_eq!(requests[1].path(), "/shipments/bulk");
    }

    #[tokio::test]
    async fn test_create_label_forwards_every_field() {
        let (app, fake) = app(FakeUpstream::new());
        let label = json!({
            "shipment": { "ship_to": {} },
            "is_return_label": true,
            "charge_event": "carrier_default",
            "label_image_id": "img_1"
        });

        let (status, _) = send(app, json_request("POST", "/api/labels", label.clone())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(fake.requests()[0].body, Some(label));
    }

    #[tokio::test]
    async fn test_unmatched_route() {
        let (app, _) = app(FakeUpstream::new());

        let (status, body) = send(app, get_request("/api/nowhere")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(body["path"], "/api/nowhere");
    }

    #[tokio::test]
    async fn test_health_and_index() {
        let (app, _) = app(FakeUpstream::new());

        let (status, body) = send(app.clone(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(app, get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["endpoints"]["batches"].is_object());
    }

    #[tokio::test]
    async fn test_download_sets_content_type() {
        let (app, fake) = app(FakeUpstream::new());

        let response = app
            .oneshot(get_request("/api/download/1/se-1/label.pdf?rotation=180"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(
            fake.downloads(),
            vec![("1/se-1/label.pdf".to_string(), Some("180".to_string()))]
        );
    }
}
