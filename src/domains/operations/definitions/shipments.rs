//! Shipment operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Shipment;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

/// Upper bound of one bulk create call.
pub const MAX_BULK_SHIPMENTS: usize = 100;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetShipmentsParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
    /// Filter by shipment status
    pub shipment_status: Option<String>,
    /// Filter by external shipment ID
    pub external_shipment_id: Option<String>,
    /// Filter by batch ID
    pub batch_id: Option<String>,
    /// Filter by tag name
    pub tag: Option<String>,
    /// Only shipments created at or after this time (ISO 8601)
    pub created_at_start: Option<String>,
    /// Only shipments created at or before this time (ISO 8601)
    pub created_at_end: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateShipmentParams {
    pub shipment: Shipment,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateShipmentsBulkParams {
    /// Shipments to create in one call (1 to 100)
    #[schemars(length(min = 1, max = 100))]
    pub shipments: Vec<Shipment>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShipmentIdParams {
    /// The shipment ID
    pub shipment_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExternalShipmentIdParams {
    /// The external shipment ID
    pub external_shipment_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateShipmentParams {
    /// The shipment ID
    pub shipment_id: String,
    pub shipment: Shipment,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShipmentRatesParams {
    /// The shipment ID
    pub shipment_id: String,
    /// Only rates created at or after this time (ISO 8601)
    pub created_at_start: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShipmentTagParams {
    /// The shipment ID
    pub shipment_id: String,
    /// Name of the tag
    pub tag_name: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_shipments",
        "List shipments with optional filtering parameters",
        endpoints::LIST_SHIPMENTS,
        RequestShape::Query,
        cached_schema_for_type::<GetShipmentsParams>,
    ),
    Operation::new(
        "create_shipment",
        "Create a new shipment",
        endpoints::CREATE_SHIPMENTS,
        RequestShape::Wrap {
            from: "shipment",
            into: "shipments",
        },
        cached_schema_for_type::<CreateShipmentParams>,
    ),
    Operation::new(
        "create_shipments_bulk",
        "Create up to 100 shipments in a single request",
        endpoints::CREATE_SHIPMENTS,
        RequestShape::Bulk {
            field: "shipments",
            max: MAX_BULK_SHIPMENTS,
        },
        cached_schema_for_type::<CreateShipmentsBulkParams>,
    ),
    Operation::new(
        "get_shipment_by_id",
        "Get a shipment by its ID",
        endpoints::GET_SHIPMENT,
        RequestShape::Empty,
        cached_schema_for_type::<ShipmentIdParams>,
    ),
    Operation::new(
        "get_shipment_by_external_id",
        "Get a shipment by its external shipment ID",
        endpoints::GET_SHIPMENT_BY_EXTERNAL_ID,
        RequestShape::Empty,
        cached_schema_for_type::<ExternalShipmentIdParams>,
    ),
    Operation::new(
        "update_shipment",
        "Update an existing shipment",
        endpoints::UPDATE_SHIPMENT,
        RequestShape::Nested("shipment"),
        cached_schema_for_type::<UpdateShipmentParams>,
    ),
    Operation::new(
        "cancel_shipment",
        "Cancel a shipment",
        endpoints::CANCEL_SHIPMENT,
        RequestShape::Empty,
        cached_schema_for_type::<ShipmentIdParams>,
    ),
    Operation::new(
        "get_shipment_rates",
        "Get the rates previously calculated for a shipment",
        endpoints::GET_SHIPMENT_RATES,
        RequestShape::Query,
        cached_schema_for_type::<ShipmentRatesParams>,
    ),
    Operation::new(
        "tag_shipment",
        "Add a tag to a shipment",
        endpoints::TAG_SHIPMENT,
        RequestShape::Empty,
        cached_schema_for_type::<ShipmentTagParams>,
    ),
    Operation::new(
        "untag_shipment",
        "Remove a tag from a shipment",
        endpoints::UNTAG_SHIPMENT,
        RequestShape::Empty,
        cached_schema_for_type::<ShipmentTagParams>,
    ),
];
