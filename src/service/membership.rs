//! Catalog membership validation with deterministic fallback

use crate::model::{CatalogEntry, catalog_contains};

/// Validated membership ids for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub ids: Vec<String>,
    /// The proposed ids were all invalid and a fallback id was substituted
    pub fallback_applied: bool,
}

/// Keep the proposed ids that exist in `catalog`, deduplicated in input order.
///
/// When nothing survives, fall back to `default_id` if it is in the catalog,
/// else to the catalog's first entry. A non-empty catalog therefore always
/// yields at least one id.
pub fn validate_membership(
    proposed: &[String],
    catalog: &[CatalogEntry],
    default_id: Option<&str>,
) -> Membership {
    let mut ids: Vec<String> = Vec::new();
    for id in proposed.iter().map(|id| id.trim()) {
        if catalog_contains(catalog, id) && !ids.iter().any(|kept| kept == id) {
            ids.push(id.to_string());
        }
    }

    if !ids.is_empty() {
        return Membership {
            ids,
            fallback_applied: false,
        };
    }

    let fallback = default_id
        .filter(|id| catalog_contains(catalog, id))
        .or_else(|| catalog.first().map(|entry| entry.id.as_str()));

    match fallback {
        Some(id) => {
            tracing::debug!(
                proposed = ?proposed,
                fallback = %id,
                "No valid membership proposed, using fallback"
            );
            Membership {
                ids: vec![id.to_string()],
                fallback_applied: true,
            }
        }
        None => {
            tracing::warn!(
                proposed = ?proposed,
                "Catalog is empty, record has no membership"
            );
            Membership {
                ids,
                fallback_applied: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lgas() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("brisbane", "Brisbane City"),
            CatalogEntry::new("mackay", "Mackay Regional"),
            CatalogEntry::new("isaac", "Isaac Regional"),
        ]
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_valid_ids_are_kept_in_order() {
        let result = validate_membership(&ids(&["isaac", "mackay"]), &lgas(), Some("mackay"));

        assert_eq!(result.ids, ids(&["isaac", "mackay"]));
        assert!(!result.fallback_applied);
    }

    #[test]
    fn test_invalid_ids_are_dropped_and_duplicates_collapsed() {
        let result = validate_membership(
            &ids(&["gotham", "isaac", "isaac", " mackay "]),
            &lgas(),
            None,
        );

        assert_eq!(result.ids, ids(&["isaac", "mackay"]));
    }

    #[test]
    fn test_unknown_place_falls_back_to_configured_default() {
        let catalog = vec![CatalogEntry::new("mackay", "Mackay Regional")];
        let result = validate_membership(&ids(&["unknown-place"]), &catalog, Some("mackay"));

        assert_eq!(result.ids, ids(&["mackay"]));
        assert!(result.fallback_applied);
    }

    #[test]
    fn test_default_outside_catalog_falls_back_to_first_entry() {
        let result = validate_membership(&[], &lgas(), Some("townsville"));

        assert_eq!(result.ids, ids(&["brisbane"]));
        assert!(result.fallback_applied);
    }

    #[test]
    fn test_empty_catalog_yields_empty_membership() {
        let result = validate_membership(&ids(&["mackay"]), &[], Some("mackay"));

        assert!(result.ids.is_empty());
        assert!(!result.fallback_applied);
    }

    proptest! {
        #[test]
        fn proptest_non_empty_catalog_never_yields_empty(
            proposed in proptest::collection::vec("[a-z]{0,10}", 0..6),
            default_id in proptest::option::of("[a-z]{0,10}"),
        ) {
            let result = validate_membership(&proposed, &lgas(), default_id.as_deref());
            prop_assert!(!result.ids.is_empty());
            for id in &result.ids {
                prop_assert!(catalog_contains(&lgas(), id));
            }
        }
    }
}
