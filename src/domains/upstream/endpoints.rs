//! ShipStation v2 endpoint table.
//!
//! One constant per upstream resource/action. Paths are relative to the
//! versioned API root (`/v2`) and use `{name}` placeholders whose names match
//! the argument names operations supply.

/// HTTP verb of an upstream endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Self::GET,
            Verb::Post => Self::POST,
            Verb::Put => Self::PUT,
            Verb::Delete => Self::DELETE,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb plus a path template on the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub verb: Verb,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            verb: Verb::Get,
            path,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            verb: Verb::Post,
            path,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            verb: Verb::Put,
            path,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            verb: Verb::Delete,
            path,
        }
    }

    /// Names of the path placeholders, in template order.
    pub fn params(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }

    /// Substitute every placeholder and return the resulting path segments.
    ///
    /// Fails with the name of the first placeholder `value_of` cannot fill.
    pub fn resolve<F>(&self, mut value_of: F) -> Result<Vec<String>, &'static str>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match placeholder(segment) {
                Some(name) => value_of(name).ok_or(name),
                None => Ok(segment.to_string()),
            })
            .collect()
    }
}

fn placeholder(segment: &'static str) -> Option<&'static str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Path prefix of the binary file download endpoint.
pub const DOWNLOADS: &str = "downloads";

// Shipments
pub const LIST_SHIPMENTS: Endpoint = Endpoint::get("/shipments");
pub const CREATE_SHIPMENTS: Endpoint = Endpoint::post("/shipments");
pub const GET_SHIPMENT: Endpoint = Endpoint::get("/shipments/{shipment_id}");
pub const GET_SHIPMENT_BY_EXTERNAL_ID: Endpoint =
    Endpoint::get("/shipments/external_shipment_id/{external_shipment_id}");
pub const UPDATE_SHIPMENT: Endpoint = Endpoint::put("/shipments/{shipment_id}");
pub const CANCEL_SHIPMENT: Endpoint = Endpoint::post("/shipments/{shipment_id}/cancel");
pub const GET_SHIPMENT_RATES: Endpoint = Endpoint::get("/shipments/{shipment_id}/rates");
pub const TAG_SHIPMENT: Endpoint = Endpoint::post("/shipments/{shipment_id}/tags/{tag_name}");
pub const UNTAG_SHIPMENT: Endpoint =
    Endpoint::delete("/shipments/{shipment_id}/tags/{tag_name}");

// Labels
pub const LIST_LABELS: Endpoint = Endpoint::get("/labels");
pub const CREATE_LABEL: Endpoint = Endpoint::post("/labels");
pub const CREATE_LABEL_FROM_RATE: Endpoint = Endpoint::post("/labels/rates/{rate_id}");
pub const CREATE_LABEL_FROM_SHIPMENT: Endpoint =
    Endpoint::post("/labels/shipment/{shipment_id}");
pub const GET_LABEL: Endpoint = Endpoint::get("/labels/{label_id}");
pub const VOID_LABEL: Endpoint = Endpoint::post("/labels/{label_id}/void");
pub const TRACK_LABEL: Endpoint = Endpoint::get("/labels/{label_id}/track");
pub const CREATE_RETURN_LABEL: Endpoint = Endpoint::post("/labels/{label_id}/return");

// Rates
pub const CALCULATE_RATES: Endpoint = Endpoint::post("/rates");
pub const ESTIMATE_RATES: Endpoint = Endpoint::post("/rates/estimate");
pub const GET_RATE: Endpoint = Endpoint::get("/rates/{rate_id}");

// Carriers
pub const LIST_CARRIERS: Endpoint = Endpoint::get("/carriers");
pub const GET_CARRIER: Endpoint = Endpoint::get("/carriers/{carrier_id}");
pub const GET_CARRIER_SERVICES: Endpoint = Endpoint::get("/carriers/{carrier_id}/services");
pub const GET_CARRIER_PACKAGES: Endpoint = Endpoint::get("/carriers/{carrier_id}/packages");
pub const GET_CARRIER_OPTIONS: Endpoint = Endpoint::get("/carriers/{carrier_id}/options");

// Warehouses
pub const LIST_WAREHOUSES: Endpoint = Endpoint::get("/warehouses");
pub const GET_WAREHOUSE: Endpoint = Endpoint::get("/warehouses/{warehouse_id}");

// Inventory
pub const LIST_INVENTORY: Endpoint = Endpoint::get("/inventory");
pub const UPDATE_INVENTORY: Endpoint = Endpoint::post("/inventory");

pub const LIST_INVENTORY_WAREHOUSES: Endpoint = Endpoint::get("/inventory_warehouses");
pub const CREATE_INVENTORY_WAREHOUSE: Endpoint = Endpoint::post("/inventory_warehouses");
pub const GET_INVENTORY_WAREHOUSE: Endpoint =
    Endpoint::get("/inventory_warehouses/{inventory_warehouse_id}");
pub const UPDATE_INVENTORY_WAREHOUSE: Endpoint =
    Endpoint::put("/inventory_warehouses/{inventory_warehouse_id}");
pub const DELETE_INVENTORY_WAREHOUSE: Endpoint =
    Endpoint::delete("/inventory_warehouses/{inventory_warehouse_id}");

pub const LIST_INVENTORY_LOCATIONS: Endpoint = Endpoint::get("/inventory_locations");
pub const CREATE_INVENTORY_LOCATION: Endpoint = Endpoint::post("/inventory_locations");
pub const GET_INVENTORY_LOCATION: Endpoint =
    Endpoint::get("/inventory_locations/{inventory_location_id}");
pub const UPDATE_INVENTORY_LOCATION: Endpoint =
    Endpoint::put("/inventory_locations/{inventory_location_id}");
pub const DELETE_INVENTORY_LOCATION: Endpoint =
    Endpoint::delete("/inventory_locations/{inventory_location_id}");

// Batches
pub const LIST_BATCHES: Endpoint = Endpoint::get("/batches");
pub const CREATE_BATCH: Endpoint = Endpoint::post("/batches");
pub const GET_BATCH_BY_EXTERNAL_ID: Endpoint =
    Endpoint::get("/batches/external_batch_id/{external_batch_id}");
pub const GET_BATCH: Endpoint = Endpoint::get("/batches/{batch_id}");
pub const UPDATE_BATCH: Endpoint = Endpoint::put("/batches/{batch_id}");
pub const DELETE_BATCH: Endpoint = Endpoint::delete("/batches/{batch_id}");
pub const ADD_TO_BATCH: Endpoint = Endpoint::post("/batches/{batch_id}/add");
pub const GET_BATCH_ERRORS: Endpoint = Endpoint::get("/batches/{batch_id}/errors");
pub const PROCESS_BATCH: Endpoint = Endpoint::post("/batches/{batch_id}/process/labels");
pub const REMOVE_FROM_BATCH: Endpoint = Endpoint::post("/batches/{batch_id}/remove");

// Manifests
pub const LIST_MANIFESTS: Endpoint = Endpoint::get("/manifests");
pub const CREATE_MANIFEST: Endpoint = Endpoint::post("/manifests");
pub const GET_MANIFEST: Endpoint = Endpoint::get("/manifests/{manifest_id}");

// Package types
pub const LIST_PACKAGE_TYPES: Endpoint = Endpoint::get("/packages");
pub const CREATE_PACKAGE_TYPE: Endpoint = Endpoint::post("/packages");
pub const GET_PACKAGE_TYPE: Endpoint = Endpoint::get("/packages/{package_id}");
pub const UPDATE_PACKAGE_TYPE: Endpoint = Endpoint::put("/packages/{package_id}");
pub const DELETE_PACKAGE_TYPE: Endpoint = Endpoint::delete("/packages/{package_id}");

// Pickups
pub const LIST_PICKUPS: Endpoint = Endpoint::get("/pickups");
pub const SCHEDULE_PICKUP: Endpoint = Endpoint::post("/pickups");
pub const GET_PICKUP: Endpoint = Endpoint::get("/pickups/{pickup_id}");
pub const CANCEL_PICKUP: Endpoint = Endpoint::delete("/pickups/{pickup_id}");

// Tags
pub const LIST_TAGS: Endpoint = Endpoint::get("/tags");
pub const CREATE_TAG: Endpoint = Endpoint::post("/tags");
pub const DELETE_TAG: Endpoint = Endpoint::delete("/tags/{tag_name}");

// Tracking
pub const STOP_TRACKING: Endpoint = Endpoint::post("/tracking/stop");

// Webhooks
pub const LIST_WEBHOOKS: Endpoint = Endpoint::get("/environment/webhooks");
pub const CREATE_WEBHOOK: Endpoint = Endpoint::post("/environment/webhooks");
pub const GET_WEBHOOK: Endpoint = Endpoint::get("/environment/webhooks/{webhook_id}");
pub const UPDATE_WEBHOOK: Endpoint = Endpoint::put("/environment/webhooks/{webhook_id}");
pub const DELETE_WEBHOOK: Endpoint = Endpoint::delete("/environment/webhooks/{webhook_id}");

// Users and products
pub const LIST_USERS: Endpoint = Endpoint::get("/users");
pub const LIST_PRODUCTS: Endpoint = Endpoint::get("/products");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_in_order() {
        let params: Vec<_> = TAG_SHIPMENT.params().collect();
        assert_eq!(params, vec!["shipment_id", "tag_name"]);
        assert_eq!(LIST_SHIPMENTS.params().count(), 0);
    }

    #[test]
    fn test_resolve_substitutes_placeholders() {
        let segments = TAG_SHIPMENT
            .resolve(|name| match name {
                "shipment_id" => Some("se-1".to_string()),
                "tag_name" => Some("rush".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(segments, vec!["shipments", "se-1", "tags", "rush"]);
    }

    #[test]
    fn test_resolve_reports_missing_param() {
        let result = GET_BATCH.resolve(|_| None);
        assert_eq!(result, Err("batch_id"));
    }

    #[test]
    fn test_verb_to_method() {
        assert_eq!(reqwest::Method::from(Verb::Delete), reqwest::Method::DELETE);
        assert_eq!(Verb::Put.to_string(), "PUT");
    }
}
