//! Batch operations for bulk label processing.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::LabelFormat;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

const BATCH_ITEMS: &[&str] = &["shipment_ids", "rate_ids"];

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBatchesParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
    /// Filter by batch number
    pub batch_number: Option<String>,
    /// Filter by external batch ID
    pub external_batch_id: Option<String>,
    /// Filter by batch status
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BatchData {
    /// Batch number
    pub batch_number: Option<String>,
    /// External batch ID
    pub external_batch_id: Option<String>,
    /// Notes for the batch
    pub batch_notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateBatchParams {
    /// Batch number
    pub batch_number: Option<String>,
    /// External batch ID
    pub external_batch_id: Option<String>,
    /// Notes for the batch
    pub batch_notes: Option<String>,
    /// Shipments to include right away
    pub shipment_ids: Option<Vec<String>>,
    /// Rates to include right away
    pub rate_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BatchIdParams {
    /// The batch ID
    pub batch_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExternalBatchIdParams {
    /// The external batch ID
    pub external_batch_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateBatchParams {
    /// The batch ID
    pub batch_id: String,
    pub batch_data: BatchData,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BatchItemsParams {
    /// The batch ID
    pub batch_id: String,
    /// Shipment IDs to add or remove
    pub shipment_ids: Option<Vec<String>>,
    /// Rate IDs to add or remove
    pub rate_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProcessBatchParams {
    /// The batch ID
    pub batch_id: String,
    /// Label format
    pub label_format: Option<LabelFormat>,
    /// Label layout
    pub label_layout: Option<String>,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_batches",
        "List batches with optional filtering parameters",
        endpoints::LIST_BATCHES,
        RequestShape::Query,
        cached_schema_for_type::<GetBatchesParams>,
    ),
    Operation::new(
        "create_batch",
        "Create a new batch for bulk label processing",
        endpoints::CREATE_BATCH,
        RequestShape::Body,
        cached_schema_for_type::<CreateBatchParams>,
    ),
    Operation::new(
        "get_batch_by_id",
        "Get a batch by its ID",
        endpoints::GET_BATCH,
        RequestShape::Empty,
        cached_schema_for_type::<BatchIdParams>,
    ),
    Operation::new(
        "get_batch_by_external_id",
        "Get a batch by its external ID",
        endpoints::GET_BATCH_BY_EXTERNAL_ID,
        RequestShape::Empty,
        cached_schema_for_type::<ExternalBatchIdParams>,
    ),
    Operation::new(
        "update_batch",
        "Update batch information",
        endpoints::UPDATE_BATCH,
        RequestShape::Nested("batch_data"),
        cached_schema_for_type::<UpdateBatchParams>,
    ),
    Operation::new(
        "delete_batch",
        "Delete a batch",
        endpoints::DELETE_BATCH,
        RequestShape::Empty,
        cached_schema_for_type::<BatchIdParams>,
    ),
    Operation::new(
        "add_to_batch",
        "Add shipments or rates to an existing batch",
        endpoints::ADD_TO_BATCH,
        RequestShape::Select(BATCH_ITEMS),
        cached_schema_for_type::<BatchItemsParams>,
    ),
    Operation::new(
        "remove_from_batch",
        "Remove shipments or rates from a batch",
        endpoints::REMOVE_FROM_BATCH,
        RequestShape::Select(BATCH_ITEMS),
        cached_schema_for_type::<BatchItemsParams>,
    ),
    Operation::new(
        "get_batch_errors",
        "Get validation errors for a batch",
        endpoints::GET_BATCH_ERRORS,
        RequestShape::Empty,
        cached_schema_for_type::<BatchIdParams>,
    ),
    Operation::new(
        "process_batch",
        "Process a batch to create labels for all items",
        endpoints::PROCESS_BATCH,
        RequestShape::Select(&["label_format", "label_layout"]),
        cached_schema_for_type::<ProcessBatchParams>,
    ),
];
