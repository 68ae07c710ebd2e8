//! Carrier pickup operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Address;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPickupsParams {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
    /// Filter by carrier ID
    pub carrier_id: Option<String>,
    /// Filter by warehouse ID
    pub warehouse_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PickupWindow {
    /// Window start (ISO 8601)
    pub start_at: String,
    /// Window end (ISO 8601)
    pub end_at: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PickupContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SchedulePickupParams {
    /// Labels the carrier should collect
    pub label_ids: Vec<String>,
    pub contact_details: PickupContact,
    pub pickup_window: PickupWindow,
    /// Where the carrier should pick up, when not the label origin
    pub pickup_address: Option<Address>,
    /// Notes for the driver
    pub pickup_notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PickupIdParams {
    /// The pickup ID
    pub pickup_id: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_pickups",
        "List scheduled pickups",
        endpoints::LIST_PICKUPS,
        RequestShape::Query,
        cached_schema_for_type::<GetPickupsParams>,
    ),
    Operation::new(
        "schedule_pickup",
        "Schedule a carrier pickup for a set of labels",
        endpoints::SCHEDULE_PICKUP,
        RequestShape::Body,
        cached_schema_for_type::<SchedulePickupParams>,
    ),
    Operation::new(
        "get_pickup_by_id",
        "Get a pickup by its ID",
        endpoints::GET_PICKUP,
        RequestShape::Empty,
        cached_schema_for_type::<PickupIdParams>,
    ),
    Operation::new(
        "cancel_pickup",
        "Cancel a scheduled pickup",
        endpoints::CANCEL_PICKUP,
        RequestShape::Empty,
        cached_schema_for_type::<PickupIdParams>,
    ),
];
