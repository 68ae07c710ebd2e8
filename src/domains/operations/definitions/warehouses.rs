//! Warehouse operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Pagination;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WarehouseIdParams {
    /// The warehouse ID
    pub warehouse_id: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_warehouses",
        "List warehouses",
        endpoints::LIST_WAREHOUSES,
        RequestShape::Query,
        cached_schema_for_type::<Pagination>,
    ),
    Operation::new(
        "get_warehouse_by_id",
        "Get a warehouse by its ID",
        endpoints::GET_WAREHOUSE,
        RequestShape::Empty,
        cached_schema_for_type::<WarehouseIdParams>,
    ),
];
