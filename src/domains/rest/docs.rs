//! `GET /`: the route documentation map.

use axum::Json;
use serde_json::{Map, Value, json};

use super::routes::GROUPS;

pub async fn index() -> Json<Value> {
    Json(documentation())
}

/// Describe every route, grouped by resource, plus the system endpoints.
pub fn documentation() -> Value {
    let mut endpoints = Map::new();

    for (group, routes) in GROUPS {
        let entries: Map<String, Value> = routes
            .iter()
            .map(|route| {
                (
                    format!("{} {}", route.verb, route.path),
                    Value::String(route.summary.to_string()),
                )
            })
            .collect();
        endpoints.insert((*group).to_string(), Value::Object(entries));
    }

    endpoints.insert(
        "system".to_string(),
        json!({
            "GET /health": "Health check",
            "GET /api/download/{*path}": "Download a label or form file (optional ?rotation=)"
        }),
    );

    json!({
        "name": "ShipStation API Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST gateway for the ShipStation API v2",
        "endpoints": endpoints,
    })
}
