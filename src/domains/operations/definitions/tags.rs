//! Tag operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Pagination;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTagParams {
    /// Name of the new tag
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TagNameParams {
    /// Name of the tag
    pub tag_name: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_tags",
        "List tags",
        endpoints::LIST_TAGS,
        RequestShape::Query,
        cached_schema_for_type::<Pagination>,
    ),
    Operation::new(
        "create_tag",
        "Create a new tag",
        endpoints::CREATE_TAG,
        RequestShape::Body,
        cached_schema_for_type::<CreateTagParams>,
    ),
    Operation::new(
        "delete_tag",
        "Delete a tag",
        endpoints::DELETE_TAG,
        RequestShape::Empty,
        cached_schema_for_type::<TagNameParams>,
    ),
];
