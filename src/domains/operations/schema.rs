//! Shared argument schema fragments.
//!
//! Operation parameter structs reference these types instead of repeating the
//! address/package/item shapes, so `schemars` emits each fragment once under
//! `$defs` and every operation points at the same definition.
//!
//! The types only describe the argument bag; the dispatcher forwards the
//! caller's JSON untouched.

use schemars::JsonSchema;
use serde::Deserialize;

/// Postal address.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Address {
    pub name: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub city_locality: String,
    pub state_province: String,
    pub postal_code: String,
    /// Two-letter ISO country code.
    pub country_code: String,
    /// Whether the address is residential ("yes", "no" or "unknown").
    pub address_residential_indicator: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Pound,
    Ounce,
    Kilogram,
    Gram,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Inch,
    Centimeter,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Dimensions {
    pub unit: DimensionUnit,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// A single parcel in a shipment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Package {
    /// Package type code, e.g. "package" or a carrier specific code.
    pub package_code: Option<String>,
    pub weight: Option<Weight>,
    pub dimensions: Option<Dimensions>,
}

/// A line item carried by a shipment (useful for sales orders).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Item {
    /// Item name
    pub name: Option<String>,
    /// Item SKU
    pub sku: Option<String>,
    /// Item quantity
    pub quantity: Option<u32>,
    /// Unit price of the item
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AddressValidation {
    NoValidation,
    ValidateOnly,
    ValidateAndClean,
}

/// Shipment definition accepted by shipment, label and rate operations.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Shipment {
    /// Carrier ID
    pub carrier_id: Option<String>,
    /// Service code
    pub service_code: Option<String>,
    /// External shipment ID
    pub external_shipment_id: Option<String>,
    /// Ship date (YYYY-MM-DD)
    pub ship_date: Option<String>,
    /// Whether to create a sales order for this shipment
    pub create_sales_order: Option<bool>,
    /// Store ID associated with the shipment
    pub store_id: Option<String>,
    /// Notes from the buyer
    pub notes_from_buyer: Option<String>,
    /// Gift notes
    pub notes_for_gift: Option<String>,
    /// Indicates if the shipment is a gift
    pub is_gift: Option<bool>,
    /// Address validation option
    pub validate_address: Option<AddressValidation>,
    pub ship_to: Address,
    pub ship_from: Address,
    pub packages: Vec<Package>,
    pub items: Option<Vec<Item>>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    Pdf,
    Png,
    Zpl,
}

/// Monetary amount.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Money {
    pub amount: f64,
    /// ISO currency code, e.g. "usd".
    pub currency: String,
}

/// Standard page-based pagination filters.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Pagination {
    /// Page number for pagination
    pub page: Option<u32>,
    /// Number of items per page
    pub page_size: Option<u32>,
}
