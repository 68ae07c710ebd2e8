//! Custom package type operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Dimensions;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPackageTypesParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePackageTypeParams {
    /// Display name of the package type
    pub name: String,
    /// Unique package code
    pub package_code: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PackageIdParams {
    /// The package type ID
    pub package_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePackageTypeParams {
    /// The package type ID
    pub package_id: String,
    pub name: Option<String>,
    pub package_code: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub description: Option<String>,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_package_types",
        "List custom package types",
        endpoints::LIST_PACKAGE_TYPES,
        RequestShape::Query,
        cached_schema_for_type::<GetPackageTypesParams>,
    ),
    Operation::new(
        "create_package_type",
        "Create a custom package type",
        endpoints::CREATE_PACKAGE_TYPE,
        RequestShape::Body,
        cached_schema_for_type::<CreatePackageTypeParams>,
    ),
    Operation::new(
        "get_package_type_by_id",
        "Get a custom package type by its ID",
        endpoints::GET_PACKAGE_TYPE,
        RequestShape::Empty,
        cached_schema_for_type::<PackageIdParams>,
    ),
    Operation::new(
        "update_package_type",
        "Update a custom package type",
        endpoints::UPDATE_PACKAGE_TYPE,
        RequestShape::Body,
        cached_schema_for_type::<UpdatePackageTypeParams>,
    ),
    Operation::new(
        "delete_package_type",
        "Delete a custom package type",
        endpoints::DELETE_PACKAGE_TYPE,
        RequestShape::Empty,
        cached_schema_for_type::<PackageIdParams>,
    ),
];
