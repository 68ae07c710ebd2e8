//! The static operation catalog.

use super::Operation;
use super::definitions::GROUPS;

/// All operations, in catalog order.
pub fn all() -> impl Iterator<Item = &'static Operation> {
    GROUPS.iter().flat_map(|(_, operations)| operations.iter())
}

/// Find an operation by name.
pub fn find(name: &str) -> Option<&'static Operation> {
    all().find(|op| op.name == name)
}

/// Number of operations in the catalog.
pub fn len() -> usize {
    GROUPS.iter().map(|(_, operations)| operations.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_not_empty() {
        assert!(len() > 0);
        assert_eq!(all().count(), len());
    }

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for op in all() {
            assert!(seen.insert(op.name), "duplicate operation {}", op.name);
        }
    }

    #[test]
    fn test_catalog_covers_every_group() {
        assert_eq!(len(), 73);
        for name in [
            "get_shipments",
            "create_shipments_bulk",
            "create_return_label",
            "estimate_rates",
            "get_carrier_options",
            "get_warehouse_by_id",
            "delete_inventory_location",
            "process_batch",
            "get_manifest_by_id",
            "update_package_type",
            "cancel_pickup",
            "delete_tag",
            "stop_tracking",
            "update_webhook",
            "get_products",
        ] {
            assert!(find(name).is_some(), "{name} missing");
        }
        assert!(find("download_file").is_none());
    }

    #[test]
    fn test_every_schema_is_an_object_and_covers_path_params() {
        for op in all() {
            let schema = op.input_schema();
            assert_eq!(
                schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{}",
                op.name
            );

            let required = op.required_arguments();
            for param in op.endpoint.params() {
                assert!(
                    required.iter().any(|r| r.as_str() == param),
                    "{} does not require path parameter {param}",
                    op.name
                );
            }
        }
    }
}
