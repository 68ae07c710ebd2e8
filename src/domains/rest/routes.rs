//! The REST route table.
//!
//! Each route binds one verb + path to one catalog operation. Path parameters
//! are renamed onto the operation's argument names; query strings and bodies
//! are folded into the argument bag according to the route's flags.

use axum::http::StatusCode;

use crate::domains::upstream::Verb;

/// How the request body reaches the argument bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyBinding {
    /// The body is ignored.
    None,
    /// A JSON object body is merged into the bag.
    Merge,
    /// The whole body becomes the value of one argument.
    Nest(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub verb: Verb,
    pub path: &'static str,
    pub operation: &'static str,
    pub summary: &'static str,
    /// `(path parameter, argument name)` pairs.
    pub params: &'static [(&'static str, &'static str)],
    pub query: bool,
    pub body: BodyBinding,
    pub creates: bool,
}

impl Route {
    const fn new(
        verb: Verb,
        path: &'static str,
        operation: &'static str,
        summary: &'static str,
    ) -> Self {
        Self {
            verb,
            path,
            operation,
            summary,
            params: &[],
            query: false,
            body: BodyBinding::None,
            creates: false,
        }
    }

    const fn get(path: &'static str, operation: &'static str, summary: &'static str) -> Self {
        Self::new(Verb::Get, path, operation, summary)
    }

    const fn post(path: &'static str, operation: &'static str, summary: &'static str) -> Self {
        Self::new(Verb::Post, path, operation, summary)
    }

    const fn put(path: &'static str, operation: &'static str, summary: &'static str) -> Self {
        Self::new(Verb::Put, path, operation, summary)
    }

    const fn delete(path: &'static str, operation: &'static str, summary: &'static str) -> Self {
        Self::new(Verb::Delete, path, operation, summary)
    }

    const fn params(self, params: &'static [(&'static str, &'static str)]) -> Self {
        Self { params, ..self }
    }

    const fn query(self) -> Self {
        Self {
            query: true,
            ..self
        }
    }

    const fn merge(self) -> Self {
        Self {
            body: BodyBinding::Merge,
            ..self
        }
    }

    const fn nest(self, key: &'static str) -> Self {
        Self {
            body: BodyBinding::Nest(key),
            ..self
        }
    }

    const fn created(self) -> Self {
        Self {
            creates: true,
            ..self
        }
    }

    /// Status returned on success.
    pub fn success_status(&self) -> StatusCode {
        if self.creates {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        }
    }
}

pub const SHIPMENTS: &[Route] = &[
    Route::get("/api/shipments", "get_shipments", "List shipments").query(),
    Route::post("/api/shipments", "create_shipment", "Create shipment")
        .nest("shipment")
        .created(),
    Route::post(
        "/api/shipments:bulk",
        "create_shipments_bulk",
        "Create up to 100 shipments",
    )
    .merge()
    .created(),
    Route::get("/api/shipments/{id}", "get_shipment_by_id", "Get shipment by ID")
        .params(&[("id", "shipment_id")]),
    Route::put("/api/shipments/{id}", "update_shipment", "Update shipment")
        .params(&[("id", "shipment_id")])
        .nest("shipment"),
    Route::get(
        "/api/shipments/external/{id}",
        "get_shipment_by_external_id",
        "Get shipment by external ID",
    )
    .params(&[("id", "external_shipment_id")]),
    Route::put("/api/shipments/{id}/cancel", "cancel_shipment", "Cancel shipment")
        .params(&[("id", "shipment_id")]),
    Route::get(
        "/api/shipments/{id}/rates",
        "get_shipment_rates",
        "Get shipment rates",
    )
    .params(&[("id", "shipment_id")])
    .query(),
    Route::post("/api/shipments/{id}/tags/{tag}", "tag_shipment", "Tag shipment")
        .params(&[("id", "shipment_id"), ("tag", "tag_name")]),
    Route::delete(
        "/api/shipments/{id}/tags/{tag}",
        "untag_shipment",
        "Remove tag from shipment",
    )
    .params(&[("id", "shipment_id"), ("tag", "tag_name")]),
];

pub const LABELS: &[Route] = &[
    Route::get("/api/labels", "get_labels", "List labels").query(),
    Route::post("/api/labels", "create_label", "Create label")
        .merge()
        .created(),
    Route::post(
        "/api/labels/rates/{id}",
        "create_label_from_rate",
        "Create label from rate",
    )
    .params(&[("id", "rate_id")])
    .merge()
    .created(),
    Route::post(
        "/api/labels/shipment/{id}",
        "create_label_from_shipment",
        "Create label from shipment",
    )
    .params(&[("id", "shipment_id")])
    .merge()
    .created(),
    Route::get("/api/labels/{id}", "get_label_by_id", "Get label by ID")
        .params(&[("id", "label_id")]),
    Route::post(
        "/api/labels/{id}/return",
        "create_return_label",
        "Create return label",
    )
    .params(&[("id", "label_id")])
    .merge()
    .created(),
    Route::get("/api/labels/{id}/track", "track_package", "Track label")
        .params(&[("id", "label_id")]),
    Route::put("/api/labels/{id}/void", "void_label", "Void label")
        .params(&[("id", "label_id")]),
];

pub const RATES: &[Route] = &[
    Route::post("/api/rates", "calculate_rates", "Calculate rates").merge(),
    Route::post("/api/rates/estimate", "estimate_rates", "Estimate rates").merge(),
    Route::get("/api/rates/{id}", "get_rate_by_id", "Get rate by ID")
        .params(&[("id", "rate_id")]),
];

pub const CARRIERS: &[Route] = &[
    Route::get("/api/carriers", "get_carriers", "List carriers").query(),
    Route::get("/api/carriers/{id}", "get_carrier_by_id", "Get carrier by ID")
        .params(&[("id", "carrier_id")]),
    Route::get(
        "/api/carriers/{id}/options",
        "get_carrier_options",
        "Get carrier options",
    )
    .params(&[("id", "carrier_id")]),
    Route::get(
        "/api/carriers/{id}/services",
        "get_carrier_services",
        "Get carrier services",
    )
    .params(&[("id", "carrier_id")]),
    Route::get(
        "/api/carriers/{id}/packages",
        "get_carrier_package_types",
        "Get carrier package types",
    )
    .params(&[("id", "carrier_id")]),
];

pub const WAREHOUSES: &[Route] = &[
    Route::get("/api/warehouses", "get_warehouses", "List warehouses").query(),
    Route::get(
        "/api/warehouses/{id}",
        "get_warehouse_by_id",
        "Get warehouse by ID",
    )
    .params(&[("id", "warehouse_id")]),
];

pub const INVENTORY: &[Route] = &[
    Route::get("/api/inventory", "get_inventory", "Get inventory levels").query(),
    Route::post("/api/inventory", "update_inventory", "Update inventory").merge(),
];

pub const INVENTORY_WAREHOUSES: &[Route] = &[
    Route::get(
        "/api/inventory-warehouses",
        "get_inventory_warehouses",
        "List inventory warehouses",
    )
    .query(),
    Route::post(
        "/api/inventory-warehouses",
        "create_inventory_warehouse",
        "Create inventory warehouse",
    )
    .merge()
    .created(),
    Route::get(
        "/api/inventory-warehouses/{id}",
        "get_inventory_warehouse_by_id",
        "Get inventory warehouse by ID",
    )
    .params(&[("id", "inventory_warehouse_id")]),
    Route::put(
        "/api/inventory-warehouses/{id}",
        "update_inventory_warehouse",
        "Update inventory warehouse",
    )
    .params(&[("id", "inventory_warehouse_id")])
    .merge(),
    Route::delete(
        "/api/inventory-warehouses/{id}",
        "delete_inventory_warehouse",
        "Delete inventory warehouse",
    )
    .params(&[("id", "inventory_warehouse_id")]),
];

pub const INVENTORY_LOCATIONS: &[Route] = &[
    Route::get(
        "/api/inventory-locations",
        "get_inventory_locations",
        "List inventory locations",
    )
    .query(),
    Route::post(
        "/api/inventory-locations",
        "create_inventory_location",
        "Create inventory location",
    )
    .merge()
    .created(),
    Route::get(
        "/api/inventory-locations/{id}",
        "get_inventory_location_by_id",
        "Get inventory location by ID",
    )
    .params(&[("id", "inventory_location_id")]),
    Route::put(
        "/api/inventory-locations/{id}",
        "update_inventory_location",
        "Update inventory location",
    )
    .params(&[("id", "inventory_location_id")])
    .merge(),
    Route::delete(
        "/api/inventory-locations/{id}",
        "delete_inventory_location",
        "Delete inventory location",
    )
    .params(&[("id", "inventory_location_id")]),
];

pub const BATCHES: &[Route] = &[
    Route::get("/api/batches", "get_batches", "List batches").query(),
    Route::post("/api/batches", "create_batch", "Create batch")
        .merge()
        .created(),
    Route::get(
        "/api/batches/external/{id}",
        "get_batch_by_external_id",
        "Get batch by external ID",
    )
    .params(&[("id", "external_batch_id")]),
    Route::get("/api/batches/{id}", "get_batch_by_id", "Get batch by ID")
        .params(&[("id", "batch_id")]),
    Route::put("/api/batches/{id}", "update_batch", "Update batch")
        .params(&[("id", "batch_id")])
        .nest("batch_data"),
    Route::delete("/api/batches/{id}", "delete_batch", "Delete batch")
        .params(&[("id", "batch_id")]),
    Route::post("/api/batches/{id}/add", "add_to_batch", "Add to batch")
        .params(&[("id", "batch_id")])
        .merge(),
    Route::get(
        "/api/batches/{id}/errors",
        "get_batch_errors",
        "Get batch errors",
    )
    .params(&[("id", "batch_id")]),
    Route::post("/api/batches/{id}/process", "process_batch", "Process batch")
        .params(&[("id", "batch_id")])
        .merge(),
    Route::post(
        "/api/batches/{id}/remove",
        "remove_from_batch",
        "Remove from batch",
    )
    .params(&[("id", "batch_id")])
    .merge(),
];

pub const MANIFESTS: &[Route] = &[
    Route::get("/api/manifests", "get_manifests", "List manifests").query(),
    Route::post("/api/manifests", "create_manifest", "Create manifest")
        .merge()
        .created(),
    Route::get(
        "/api/manifests/{id}",
        "get_manifest_by_id",
        "Get manifest by ID",
    )
    .params(&[("id", "manifest_id")]),
];

pub const PACKAGES: &[Route] = &[
    Route::get("/api/packages", "get_package_types", "List package types").query(),
    Route::post("/api/packages", "create_package_type", "Create package type")
        .merge()
        .created(),
    Route::get(
        "/api/packages/{id}",
        "get_package_type_by_id",
        "Get package type by ID",
    )
    .params(&[("id", "package_id")]),
    Route::put(
        "/api/packages/{id}",
        "update_package_type",
        "Update package type",
    )
    .params(&[("id", "package_id")])
    .merge(),
    Route::delete(
        "/api/packages/{id}",
        "delete_package_type",
        "Delete package type",
    )
    .params(&[("id", "package_id")]),
];

pub const PICKUPS: &[Route] = &[
    Route::get("/api/pickups", "get_pickups", "List scheduled pickups").query(),
    Route::post("/api/pickups", "schedule_pickup", "Schedule pickup")
        .merge()
        .created(),
    Route::get("/api/pickups/{id}", "get_pickup_by_id", "Get pickup by ID")
        .params(&[("id", "pickup_id")]),
    Route::delete("/api/pickups/{id}", "cancel_pickup", "Cancel pickup")
        .params(&[("id", "pickup_id")]),
];

pub const TAGS: &[Route] = &[
    Route::get("/api/tags", "get_tags", "List tags").query(),
    Route::post("/api/tags", "create_tag", "Create tag")
        .merge()
        .created(),
    Route::delete("/api/tags/{name}", "delete_tag", "Delete tag").params(&[("name", "tag_name")]),
];

pub const WEBHOOKS: &[Route] = &[
    Route::get("/api/webhooks", "get_webhooks", "List webhooks").query(),
    Route::post("/api/webhooks", "create_webhook", "Create webhook")
        .merge()
        .created(),
    Route::get("/api/webhooks/{id}", "get_webhook_by_id", "Get webhook by ID")
        .params(&[("id", "webhook_id")]),
    Route::put("/api/webhooks/{id}", "update_webhook", "Update webhook")
        .params(&[("id", "webhook_id")])
        .merge(),
    Route::delete("/api/webhooks/{id}", "delete_webhook", "Delete webhook")
        .params(&[("id", "webhook_id")]),
];

pub const ACCOUNT: &[Route] = &[
    Route::get("/api/users", "get_users", "List users").query(),
    Route::get("/api/products", "get_products", "List products").query(),
];

pub const TRACKING: &[Route] = &[Route::post(
    "/api/tracking/stop",
    "stop_tracking",
    "Stop tracking updates",
)
.merge()];

/// Route groups as shown by the documentation index.
pub const GROUPS: &[(&str, &[Route])] = &[
    ("shipments", SHIPMENTS),
    ("labels", LABELS),
    ("rates", RATES),
    ("carriers", CARRIERS),
    ("warehouses", WAREHOUSES),
    ("inventory", INVENTORY),
    ("inventory_warehouses", INVENTORY_WAREHOUSES),
    ("inventory_locations", INVENTORY_LOCATIONS),
    ("batches", BATCHES),
    ("manifests", MANIFESTS),
    ("packages", PACKAGES),
    ("pickups", PICKUPS),
    ("tags", TAGS),
    ("webhooks", WEBHOOKS),
    ("account", ACCOUNT),
    ("tracking", TRACKING),
];

pub fn all() -> impl Iterator<Item = &'static Route> {
    GROUPS.iter().flat_map(|(_, routes)| routes.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::operations::catalog;
    use std::collections::HashSet;

    #[test]
    fn test_every_route_targets_a_catalog_operation() {
        for route in all() {
            let op = catalog::find(route.operation)
                .unwrap_or_else(|| panic!("{} has no operation", route.path));

            // Every path parameter of the operation must come from the URL.
            for param in op.endpoint.params() {
                assert!(
                    route.params.iter().any(|(_, arg)| *arg == param),
                    "{} {} does not bind {param}",
                    route.verb,
                    route.path
                );
            }
        }
    }

    #[test]
    fn test_route_params_appear_in_path() {
        for route in all() {
            for (param, _) in route.params {
                assert!(
                    route.path.contains(&format!("{{{param}}}")),
                    "{} lacks {{{param}}}",
                    route.path
                );
            }
        }
    }

    #[test]
    fn test_verb_and_path_unique() {
        let mut seen = HashSet::new();
        for route in all() {
            assert!(
                seen.insert((route.verb, route.path)),
                "duplicate {} {}",
                route.verb,
                route.path
            );
        }
    }

    #[test]
    fn test_creation_routes_return_created() {
        let create = SHIPMENTS
            .iter()
            .find(|r| r.operation == "create_shipment")
            .unwrap();
        assert_eq!(create.success_status(), StatusCode::CREATED);
        assert_eq!(create.body, BodyBinding::Nest("shipment"));

        let rates = RATES.iter().find(|r| r.operation == "calculate_rates").unwrap();
        assert_eq!(rates.success_status(), StatusCode::OK);
    }
}
