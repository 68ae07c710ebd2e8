//! Operations domain module.
//!
//! An [`Operation`] is one named, schema-described unit of work mapping to
//! exactly one upstream call. The catalog is static; the [`Dispatcher`]
//! resolves `(name, arguments)` pairs against it.
//!
//! ## Architecture
//!
//! - `definitions/` - operation tables, one file per resource group
//! - `schema.rs` - shared schema fragments (Address, Package, Item, ...)
//! - `shape.rs` - request shaping rules
//! - `catalog.rs` - the ordered union of all definition tables
//! - `dispatcher.rs` - lookup, validation and delegation to the upstream
//!
//! ## Adding an Operation
//!
//! 1. Add (or reuse) an endpoint constant in `upstream/endpoints.rs`
//! 2. Add a params struct deriving `JsonSchema` in the matching definitions file
//! 3. Append an `Operation::new(...)` entry to that file's `OPERATIONS`
//!
//! Both front ends pick it up without further changes (the REST front end
//! needs a route only if the operation should be reachable over HTTP).

pub mod catalog;
pub mod definitions;
mod dispatcher;
mod error;
pub mod schema;
mod shape;

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;

use crate::domains::upstream::{Endpoint, UpstreamRequest};

pub use dispatcher::Dispatcher;
pub use error::OperationError;
pub use shape::{Payload, RequestShape};

/// A catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Unique operation (tool) name.
    pub name: &'static str,
    /// Human readable description shown to callers.
    pub description: &'static str,
    /// Upstream verb and path template.
    pub endpoint: Endpoint,
    /// How remaining arguments become the outbound request.
    pub shape: RequestShape,
    schema: fn() -> Arc<JsonObject>,
}

impl Operation {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        endpoint: Endpoint,
        shape: RequestShape,
        schema: fn() -> Arc<JsonObject>,
    ) -> Self {
        Self {
            name,
            description,
            endpoint,
            shape,
            schema,
        }
    }

    /// JSON schema of the accepted arguments.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        (self.schema)()
    }

    /// Top-level argument names the schema marks as required.
    pub fn required_arguments(&self) -> Vec<String> {
        self.input_schema()
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Create a Tool model for this operation (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate the argument bag and build the upstream request.
    ///
    /// Checks the schema's required keys, consumes the path parameters and
    /// hands whatever is left to the request shape.
    pub fn prepare(&self, mut arguments: JsonObject) -> Result<UpstreamRequest, OperationError> {
        for key in self.required_arguments() {
            if arguments.get(&key).is_none_or(Value::is_null) {
                return Err(OperationError::validation(
                    self.name,
                    format!("missing required argument '{key}'"),
                ));
            }
        }

        let segments = self
            .endpoint
            .resolve(|param| arguments.remove(param).and_then(path_value))
            .map_err(|param| {
                OperationError::validation(
                    self.name,
                    format!("path parameter '{param}' must be a non-empty string or number"),
                )
            })?;

        let Payload { query, body } = self
            .shape
            .apply(arguments)
            .map_err(|message| OperationError::validation(self.name, message))?;

        Ok(UpstreamRequest {
            verb: self.endpoint.verb,
            segments,
            query,
            body,
        })
    }
}

fn path_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::upstream::Verb;
    use serde_json::json;

    fn op(name: &str) -> &'static Operation {
        catalog::find(name).unwrap()
    }

    fn bag(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_prepare_consumes_path_params() {
        let request = op("tag_shipment")
            .prepare(bag(json!({ "shipment_id": "se-9", "tag_name": "rush" })))
            .unwrap();

        assert_eq!(request.verb, Verb::Post);
        assert_eq!(request.path(), "/shipments/se-9/tags/rush");
        assert_eq!(request.body, None);
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_prepare_numeric_path_param() {
        let request = op("get_carrier_services")
            .prepare(bag(json!({ "carrier_id": 42 })))
            .unwrap();
        assert_eq!(request.path(), "/carriers/42/services");
    }

    #[test]
    fn test_prepare_rejects_missing_required() {
        let err = op("get_shipment_by_id").prepare(JsonObject::new()).unwrap_err();
        assert!(matches!(err, OperationError::Validation { .. }));
        assert!(err.to_string().contains("shipment_id"));
    }

    #[test]
    fn test_prepare_rejects_blank_path_param() {
        let err = op("void_label")
            .prepare(bag(json!({ "label_id": "  " })))
            .unwrap_err();
        assert!(err.to_string().contains("label_id"));
    }

    #[test]
    fn test_update_forwards_rest_as_body() {
        let request = op("update_inventory_location")
            .prepare(bag(json!({ "inventory_location_id": "il-1", "name": "Shelf B" })))
            .unwrap();
        assert_eq!(request.verb, Verb::Put);
        assert_eq!(request.path(), "/inventory_locations/il-1");
        assert_eq!(request.body, Some(json!({ "name": "Shelf B" })));
    }

    #[test]
    fn test_to_tool_carries_schema() {
        let tool = op("create_shipment").to_tool();
        assert_eq!(tool.name, "create_shipment");
        assert!(tool.description.is_some());
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
        assert!(op("create_shipment")
            .required_arguments()
            .contains(&"shipment".to_string()));
    }
}
