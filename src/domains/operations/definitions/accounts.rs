//! Account level listings: users and products.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Pagination;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProductsParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
    /// Filter by SKU
    pub sku: Option<String>,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_users",
        "List users on the account",
        endpoints::LIST_USERS,
        RequestShape::Query,
        cached_schema_for_type::<Pagination>,
    ),
    Operation::new(
        "get_products",
        "List products",
        endpoints::LIST_PRODUCTS,
        RequestShape::Query,
        cached_schema_for_type::<GetProductsParams>,
    ),
];
