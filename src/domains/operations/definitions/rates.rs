//! Rate operations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::{Address, Dimensions, Shipment, Weight};
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RateOptions {
    /// Array of carrier IDs to get rates from
    pub carrier_ids: Option<Vec<String>>,
    /// Restrict to these service codes
    pub service_codes: Option<Vec<String>>,
    /// Restrict to these package types
    pub package_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateRatesParams {
    pub rate_options: Option<RateOptions>,
    pub shipment: Shipment,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EstimateRatesParams {
    /// Carrier IDs to estimate against
    pub carrier_ids: Vec<String>,
    pub from_country_code: String,
    pub from_postal_code: String,
    pub from_city_locality: Option<String>,
    pub from_state_province: Option<String>,
    pub to_country_code: String,
    pub to_postal_code: String,
    pub to_city_locality: Option<String>,
    pub to_state_province: Option<String>,
    pub weight: Weight,
    pub dimensions: Option<Dimensions>,
    /// Ship date (YYYY-MM-DD)
    pub ship_date: Option<String>,
    /// Optional full origin address, used instead of the from_* fields
    pub ship_from: Option<Address>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RateIdParams {
    /// The rate ID
    pub rate_id: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "calculate_rates",
        "Calculate shipping rates for a shipment",
        endpoints::CALCULATE_RATES,
        RequestShape::Merge {
            options: "rate_options",
            subject: "shipment",
        },
        cached_schema_for_type::<CalculateRatesParams>,
    ),
    Operation::new(
        "estimate_rates",
        "Estimate shipping rates from origin, destination and weight only",
        endpoints::ESTIMATE_RATES,
        RequestShape::Body,
        cached_schema_for_type::<EstimateRatesParams>,
    ),
    Operation::new(
        "get_rate_by_id",
        "Get a rate by its ID",
        endpoints::GET_RATE,
        RequestShape::Empty,
        cached_schema_for_type::<RateIdParams>,
    ),
];
