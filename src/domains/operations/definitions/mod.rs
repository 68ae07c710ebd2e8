//! Operation tables, one module per ShipStation resource group.

pub mod accounts;
pub mod batches;
pub mod carriers;
pub mod inventory;
pub mod labels;
pub mod manifests;
pub mod packages;
pub mod pickups;
pub mod rates;
pub mod shipments;
pub mod tags;
pub mod tracking;
pub mod warehouses;
pub mod webhooks;

use super::Operation;

/// Every group in catalog order.
pub const GROUPS: &[(&str, &[Operation])] = &[
    ("shipments", shipments::OPERATIONS),
    ("labels", labels::OPERATIONS),
    ("rates", rates::OPERATIONS),
    ("carriers", carriers::OPERATIONS),
    ("warehouses", warehouses::OPERATIONS),
    ("inventory", inventory::OPERATIONS),
    ("batches", batches::OPERATIONS),
    ("manifests", manifests::OPERATIONS),
    ("packages", packages::OPERATIONS),
    ("pickups", pickups::OPERATIONS),
    ("tags", tags::OPERATIONS),
    ("tracking", tracking::OPERATIONS),
    ("webhooks", webhooks::OPERATIONS),
    ("accounts", accounts::OPERATIONS),
];
