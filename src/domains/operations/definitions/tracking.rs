use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StopTrackingParams {
    /// Carrier code, e.g. "ups"
    pub carrier_code: String,
    /// Tracking number to stop following
    pub tracking_number: String,
}

pub const OPERATIONS: &[Operation] = &[Operation::new(
    "stop_tracking",
    "Stop receiving tracking updates for a package",
    endpoints::STOP_TRACKING,
    RequestShape::Body,
    cached_schema_for_type::<StopTrackingParams>,
)];
