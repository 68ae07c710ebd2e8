//! Carrier operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Pagination;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CarrierIdParams {
    /// The carrier ID
    pub carrier_id: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_carriers",
        "List available carriers",
        endpoints::LIST_CARRIERS,
        RequestShape::Query,
        cached_schema_for_type::<Pagination>,
    ),
    Operation::new(
        "get_carrier_by_id",
        "Get a carrier by its ID",
        endpoints::GET_CARRIER,
        RequestShape::Empty,
        cached_schema_for_type::<CarrierIdParams>,
    ),
    Operation::new(
        "get_carrier_services",
        "Get services for a specific carrier",
        endpoints::GET_CARRIER_SERVICES,
        RequestShape::Empty,
        cached_schema_for_type::<CarrierIdParams>,
    ),
    Operation::new(
        "get_carrier_package_types",
        "Get the package types a specific carrier supports",
        endpoints::GET_CARRIER_PACKAGES,
        RequestShape::Empty,
        cached_schema_for_type::<CarrierIdParams>,
    ),
    Operation::new(
        "get_carrier_options",
        "Get the advanced options a specific carrier supports",
        endpoints::GET_CARRIER_OPTIONS,
        RequestShape::Empty,
        cached_schema_for_type::<CarrierIdParams>,
    ),
];
