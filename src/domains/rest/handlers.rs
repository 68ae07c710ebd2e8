//! REST request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodFilter, MethodRouter, on};
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use super::error::ApiError;
use super::routes::{BodyBinding, Route};
use super::timestamp;
use crate::domains::operations::Dispatcher;
use crate::domains::upstream::Verb;

type AppState = State<Arc<Dispatcher>>;

fn method_filter(verb: Verb) -> MethodFilter {
    match verb {
        Verb::Get => MethodFilter::GET,
        Verb::Post => MethodFilter::POST,
        Verb::Put => MethodFilter::PUT,
        Verb::Delete => MethodFilter::DELETE,
    }
}

/// Build the method router serving one table entry.
pub fn method_router(route: &'static Route) -> MethodRouter<Arc<Dispatcher>> {
    let filter = method_filter(route.verb);

    if route.params.is_empty() {
        on(
            filter,
            move |State(dispatcher): AppState,
                  uri: Uri,
                  Query(query): Query<Vec<(String, String)>>,
                  body: Bytes| async move {
                invoke(&dispatcher, route, HashMap::new(), query, &body, uri.path()).await
            },
        )
    } else {
        on(
            filter,
            move |State(dispatcher): AppState,
                  uri: Uri,
                  Path(params): Path<HashMap<String, String>>,
                  Query(query): Query<Vec<(String, String)>>,
                  body: Bytes| async move {
                invoke(&dispatcher, route, params, query, &body, uri.path()).await
            },
        )
    }
}

#[instrument(skip_all, fields(operation = route.operation))]
async fn invoke(
    dispatcher: &Dispatcher,
    route: &Route,
    params: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: &[u8],
    path: &str,
) -> Result<Response, ApiError> {
    let arguments =
        bind_arguments(route, params, query, body).map_err(|m| ApiError::rejected(m, path))?;

    let value = dispatcher
        .dispatch(route.operation, arguments)
        .await
        .map_err(|e| ApiError::from_operation(e, path))?;

    Ok((route.success_status(), Json(value)).into_response())
}

/// Fold body, query string and path parameters into one argument bag.
///
/// Path parameters are applied last so they win over same-named body fields.
pub fn bind_arguments(
    route: &Route,
    mut params: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: &[u8],
) -> Result<JsonObject, String> {
    let mut arguments = JsonObject::new();

    match route.body {
        BodyBinding::None => {}
        BodyBinding::Merge => match parse_body(body)? {
            None => {}
            Some(Value::Object(fields)) => arguments.extend(fields),
            Some(_) => return Err("request body must be a JSON object".to_string()),
        },
        BodyBinding::Nest(key) => {
            if let Some(value) = parse_body(body)? {
                arguments.insert(key.to_string(), value);
            }
        }
    }

    if route.query {
        for (key, value) in query {
            push_query(&mut arguments, key, value);
        }
    }

    for (param, argument) in route.params {
        if let Some(value) = params.remove(*param) {
            arguments.insert((*argument).to_string(), Value::String(value));
        }
    }

    Ok(arguments)
}

fn parse_body(body: &[u8]) -> Result<Option<Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| format!("malformed JSON body: {e}"))
}

/// Repeated query keys collect into an array.
fn push_query(arguments: &mut JsonObject, key: String, value: String) {
    match arguments.get_mut(&key) {
        Some(Value::Array(items)) => items.push(Value::String(value)),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, Value::String(value)]);
        }
        None => {
            arguments.insert(key, Value::String(value));
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    rotation: Option<String>,
}

/// `GET /api/download/{*path}`: stream a label or form file.
pub async fn download(
    State(dispatcher): AppState,
    uri: Uri,
    Path(file): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let bytes = dispatcher
        .download_file(&file, query.rotation.as_deref())
        .await
        .map_err(|e| ApiError::from_operation(e, uri.path()))?;

    Ok(([(header::CONTENT_TYPE, content_type(&file))], bytes).into_response())
}

/// Content type by file extension.
pub fn content_type(file: &str) -> &'static str {
    let file = file.to_ascii_lowercase();
    if file.ends_with(".pdf") {
        "application/pdf"
    } else if file.ends_with(".png") {
        "image/png"
    } else if file.ends_with(".zpl") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": timestamp()
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "path": uri.path(),
            "timestamp": timestamp()
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::rest::routes::{BATCHES, SHIPMENTS};

    fn route(table: &'static [Route], operation: &str) -> &'static Route {
        table.iter().find(|r| r.operation == operation).unwrap()
    }

    #[test]
    fn test_bind_nests_body_and_renames_params() {
        let params = HashMap::from([("id".to_string(), "b-7".to_string())]);
        let arguments = bind_arguments(
            route(BATCHES, "update_batch"),
            params,
            Vec::new(),
            br#"{"batch_notes":"late"}"#,
        )
        .unwrap();

        assert_eq!(
            Value::Object(arguments),
            json!({ "batch_id": "b-7", "batch_data": { "batch_notes": "late" } })
        );
    }

    #[test]
    fn test_bind_collects_repeated_query_keys() {
        let query = vec![
            ("shipment_status".to_string(), "pending".to_string()),
            ("tag".to_string(), "a".to_string()),
            ("tag".to_string(), "b".to_string()),
            ("tag".to_string(), "c".to_string()),
        ];
        let arguments =
            bind_arguments(route(SHIPMENTS, "get_shipments"), HashMap::new(), query, b"")
                .unwrap();

        assert_eq!(arguments["shipment_status"], json!("pending"));
        assert_eq!(arguments["tag"], json!(["a", "b", "c"]));
    }

    #[test]
    fn test_bind_rejects_malformed_and_non_object_bodies() {
        let add = route(BATCHES, "add_to_batch");
        let params = || HashMap::from([("id".to_string(), "b-1".to_string())]);

        let malformed = bind_arguments(add, params(), Vec::new(), b"{oops").unwrap_err();
        assert!(malformed.starts_with("malformed JSON body"));

        let list = bind_arguments(add, params(), Vec::new(), b"[1,2]").unwrap_err();
        assert!(list.contains("JSON object"));
    }

    #[test]
    fn test_path_param_wins_over_body() {
        let params = HashMap::from([("id".to_string(), "b-1".to_string())]);
        let arguments = bind_arguments(
            route(BATCHES, "add_to_batch"),
            params,
            Vec::new(),
            br#"{"batch_id":"spoofed","shipment_ids":["se-1"]}"#,
        )
        .unwrap();
        assert_eq!(arguments["batch_id"], json!("b-1"));
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type("1/label.pdf"), "application/pdf");
        assert_eq!(content_type("1/label.PNG"), "image/png");
        assert_eq!(content_type("1/label.zpl"), "text/plain");
        assert_eq!(content_type("1/label"), "application/octet-stream");
    }
}
