//! Manifest operations (end-of-day carrier hand-off).

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetManifestsParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
    /// Filter by carrier ID
    pub carrier_id: Option<String>,
    /// Filter by warehouse ID
    pub warehouse_id: Option<String>,
    /// Filter by ship date start (YYYY-MM-DD)
    pub ship_date_start: Option<String>,
    /// Filter by ship date end (YYYY-MM-DD)
    pub ship_date_end: Option<String>,
    /// Filter by creation date start (YYYY-MM-DD)
    pub created_at_start: Option<String>,
    /// Filter by creation date end (YYYY-MM-DD)
    pub created_at_end: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateManifestParams {
    /// Carrier ID for the manifest
    pub carrier_id: String,
    /// Warehouse ID for the manifest
    pub warehouse_id: Option<String>,
    /// Ship date for the manifest (YYYY-MM-DD)
    pub ship_date: Option<String>,
    /// Label IDs to include in the manifest
    pub label_ids: Option<Vec<String>>,
    /// Label IDs to exclude from the manifest
    pub excluded_label_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ManifestIdParams {
    /// The manifest ID
    pub manifest_id: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_manifests",
        "List manifests with optional filtering parameters",
        endpoints::LIST_MANIFESTS,
        RequestShape::Query,
        cached_schema_for_type::<GetManifestsParams>,
    ),
    Operation::new(
        "create_manifest",
        "Create a new manifest for end-of-day processing",
        endpoints::CREATE_MANIFEST,
        RequestShape::Body,
        cached_schema_for_type::<CreateManifestParams>,
    ),
    Operation::new(
        "get_manifest_by_id",
        "Get a manifest by its ID",
        endpoints::GET_MANIFEST,
        RequestShape::Empty,
        cached_schema_for_type::<ManifestIdParams>,
    ),
];
