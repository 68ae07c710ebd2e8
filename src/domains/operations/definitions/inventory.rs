//! Inventory operations: stock levels, inventory warehouses and locations.

use rmcp::handler::server::tool::cached_schema_for_type;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::operations::schema::Money;
use crate::domains::operations::{Operation, RequestShape};
use crate::domains::upstream::endpoints;

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InventoryGrouping {
    Warehouse,
    Location,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Increment,
    Decrement,
    Adjust,
    Modify,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockCondition {
    Sellable,
    Damaged,
    Expired,
    QaHold,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetInventoryParams {
    /// Filter by SKU
    pub sku: Option<String>,
    /// Filter by inventory warehouse ID
    pub inventory_warehouse_id: Option<String>,
    /// Filter by inventory location ID
    pub inventory_location_id: Option<String>,
    /// Group by warehouse or location
    pub group_by: Option<InventoryGrouping>,
    /// Number of items to return
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateInventoryParams {
    /// Type of update (increment, decrement, adjust, modify)
    pub transaction_type: TransactionType,
    /// SKU to update
    pub sku: String,
    /// Quantity to update
    pub quantity: i64,
    /// Inventory location ID
    pub inventory_location_id: String,
    /// Cost information
    pub cost: Option<Money>,
    /// Inventory condition
    pub condition: Option<StockCondition>,
    /// Reason for update
    pub reason: Option<String>,
    /// Additional notes
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LimitParams {
    /// Number of items to return
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateInventoryWarehouseParams {
    /// Warehouse name
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InventoryWarehouseIdParams {
    /// The inventory warehouse ID
    pub inventory_warehouse_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateInventoryWarehouseParams {
    /// The inventory warehouse ID
    pub inventory_warehouse_id: String,
    /// New warehouse name
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateInventoryLocationParams {
    /// Location name
    pub name: String,
    /// Warehouse ID
    pub inventory_warehouse_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InventoryLocationIdParams {
    /// The inventory location ID
    pub inventory_location_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateInventoryLocationParams {
    /// The inventory location ID
    pub inventory_location_id: String,
    /// New location name
    pub name: String,
}

pub const OPERATIONS: &[Operation] = &[
    Operation::new(
        "get_inventory",
        "Get inventory levels",
        endpoints::LIST_INVENTORY,
        RequestShape::Query,
        cached_schema_for_type::<GetInventoryParams>,
    ),
    Operation::new(
        "update_inventory",
        "Update SKU stock levels",
        endpoints::UPDATE_INVENTORY,
        RequestShape::Body,
        cached_schema_for_type::<UpdateInventoryParams>,
    ),
    Operation::new(
        "get_inventory_warehouses",
        "Get inventory warehouses",
        endpoints::LIST_INVENTORY_WAREHOUSES,
        RequestShape::Query,
        cached_schema_for_type::<LimitParams>,
    ),
    Operation::new(
        "create_inventory_warehouse",
        "Create a new inventory warehouse",
        endpoints::CREATE_INVENTORY_WAREHOUSE,
        RequestShape::Body,
        cached_schema_for_type::<CreateInventoryWarehouseParams>,
    ),
    Operation::new(
        "get_inventory_warehouse_by_id",
        "Get an inventory warehouse by its ID",
        endpoints::GET_INVENTORY_WAREHOUSE,
        RequestShape::Empty,
        cached_schema_for_type::<InventoryWarehouseIdParams>,
    ),
    Operation::new(
        "update_inventory_warehouse",
        "Rename an inventory warehouse",
        endpoints::UPDATE_INVENTORY_WAREHOUSE,
        RequestShape::Body,
        cached_schema_for_type::<UpdateInventoryWarehouseParams>,
    ),
    Operation::new(
        "delete_inventory_warehouse",
        "Delete an inventory warehouse",
        endpoints::DELETE_INVENTORY_WAREHOUSE,
        RequestShape::Empty,
        cached_schema_for_type::<InventoryWarehouseIdParams>,
    ),
    Operation::new(
        "get_inventory_locations",
        "Get inventory locations",
        endpoints::LIST_INVENTORY_LOCATIONS,
        RequestShape::Query,
        cached_schema_for_type::<LimitParams>,
    ),
    Operation::new(
        "create_inventory_location",
        "Create a new inventory location",
        endpoints::CREATE_INVENTORY_LOCATION,
        RequestShape::Body,
        cached_schema_for_type::<CreateInventoryLocationParams>,
    ),
    Operation::new(
        "get_inventory_location_by_id",
        "Get an inventory location by its ID",
        endpoints::GET_INVENTORY_LOCATION,
        RequestShape::Empty,
        cached_schema_for_type::<InventoryLocationIdParams>,
    ),
    Operation::new(
        "update_inventory_location",
        "Rename an inventory location",
        endpoints::UPDATE_INVENTORY_LOCATION,
        RequestShape::Body,
        cached_schema_for_type::<UpdateInventoryLocationParams>,
    ),
    Operation::new(
        "delete_inventory_location",
        "Delete an inventory location",
        endpoints::DELETE_INVENTORY_LOCATION,
        RequestShape::Empty,
        cached_schema_for_type::<InventoryLocationIdParams>,
    ),
];
