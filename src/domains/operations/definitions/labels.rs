//! Label operations.
//!
//! Label creation forwards every argument the caller sent, but drops the
//! format/layout options when they are unset so ShipStation applies its own
//! defaults.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::{LabelFormat, Shipment};
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

const LABEL_OPTIONS: &[&str] = &["label_format", "label_layout", "label_download_type"];

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetLabelsParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
    /// Filter by label status
    pub label_status: Option<String>,
    /// Filter by shipment ID
    pub shipment_id: Option<String>,
    /// Filter by carrier ID
    pub carrier_id: Option<String>,
    /// Filter by warehouse ID
    pub warehouse_id: Option<String>,
    /// Filter by batch ID
    pub batch_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    pub shipment: Shipment,
    /// Label format (pdf, png, zpl)
    pub label_format: Option<LabelFormat>,
    /// Label layout, e.g. "4x6" or "letter"
    pub label_layout: Option<String>,
    /// How the label file is returned ("url" or "inline")
    pub label_download_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabelFromRateParams {
    /// ID of a previously calculated rate
    pub rate_id: String,
    /// Label format (pdf, png, zpl)
    pub label_format: Option<LabelFormat>,
    /// Label layout
    pub label_layout: Option<String>,
    /// How the label file is returned ("url" or "inline")
    pub label_download_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabelFromShipmentParams {
    /// ID of an existing shipment
    pub shipment_id: String,
    /// Label format (pdf, png, zpl)
    pub label_format: Option<LabelFormat>,
    /// Label layout
    pub label_layout: Option<String>,
    /// How the label file is returned ("url" or "inline")
    pub label_download_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    /// The label ID
    pub label_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReturnLabelParams {
    /// ID of the outbound label
    pub label_id: String,
    /// Label format (pdf, png, zpl)
    pub label_format: Option<LabelFormat>,
    /// Label layout
    pub label_layout: Option<String>,
    /// How the label file is returned ("url" or "inline")
    pub label_download_type: Option<String>,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_labels",
        "List labels with optional filtering parameters",
        endpoints::LIST_LABELS,
        RequestShape::Query,
        cached_schema_for_type::<GetLabelsParams>,
    ),
    Operation::new(
        "create_label",
        "Create a new shipping label",
        endpoints::CREATE_LABEL,
        RequestShape::Prune(LABEL_OPTIONS),
        cached_schema_for_type::<CreateLabelParams>,
    ),
    Operation::new(
        "create_label_from_rate",
        "Purchase a label from a previously calculated rate",
        endpoints::CREATE_LABEL_FROM_RATE,
        RequestShape::Prune(LABEL_OPTIONS),
        cached_schema_for_type::<LabelFromRateParams>,
    ),
    Operation::new(
        "create_label_from_shipment",
        "Purchase a label for an existing shipment",
        endpoints::CREATE_LABEL_FROM_SHIPMENT,
        RequestShape::Prune(LABEL_OPTIONS),
        cached_schema_for_type::<LabelFromShipmentParams>,
    ),
    Operation::new(
        "get_label_by_id",
        "Get a label by its ID",
        endpoints::GET_LABEL,
        RequestShape::Empty,
        cached_schema_for_type::<LabelIdParams>,
    ),
    Operation::new(
        "void_label",
        "Void a shipping label",
        endpoints::VOID_LABEL,
        RequestShape::Empty,
        cached_schema_for_type::<LabelIdParams>,
    ),
    Operation::new(
        "track_package",
        "Track a package using label ID",
        endpoints::TRACK_LABEL,
        RequestShape::Empty,
        cached_schema_for_type::<LabelIdParams>,
    ),
    Operation::new(
        "create_return_label",
        "Create a return label for an existing outbound label",
        endpoints::CREATE_RETURN_LABEL,
        RequestShape::Prune(LABEL_OPTIONS),
        cached_schema_for_type::<ReturnLabelParams>,
    ),
];
