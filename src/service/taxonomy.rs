//! Open-set classification against a caller-supplied catalog
//!
//! Reusing an existing category is preferred over minting a new one, and an
//! identifier that is not in the catalog is never trusted.

use crate::model::extracted::ExtractedOpportunityType;
use crate::model::{CatalogEntry, TaxonomyDecision, catalog_contains};

pub const UNRESOLVED_REASONING: &str = "Low confidence: manual classification required.";
pub const MISSING_DEFINITION: &str = "No definition provided.";
pub const MISSING_CLOSEST_REASONING: &str = "No reasoning provided.";

/// Decide the category of a record from the model's classification payload.
///
/// First match wins: valid existing id, proposal with a valid closest id,
/// bare proposal, unresolved.
pub fn resolve_taxonomy(
    payload: Option<&ExtractedOpportunityType>,
    catalog: &[CatalogEntry],
) -> TaxonomyDecision {
    let Some(payload) = payload else {
        return unresolved();
    };

    let existing_id = valid_id(payload.existing_id.as_deref(), catalog, "existingId");
    if let Some(id) = existing_id {
        return TaxonomyDecision::Matched { id };
    }

    let Some(name) = non_blank(payload.proposed_name.as_deref()) else {
        return unresolved();
    };
    let definition = non_blank(payload.proposed_definition.as_deref())
        .unwrap_or_else(|| MISSING_DEFINITION.to_string());

    match valid_id(
        payload.closest_existing_id.as_deref(),
        catalog,
        "closestExistingId",
    ) {
        Some(closest_id) => TaxonomyDecision::ProposedWithClosest {
            name,
            definition,
            closest_id,
            closest_reasoning: non_blank(payload.closest_reasoning.as_deref())
                .unwrap_or_else(|| MISSING_CLOSEST_REASONING.to_string()),
        },
        None => TaxonomyDecision::ProposedNew { name, definition },
    }
}

fn unresolved() -> TaxonomyDecision {
    TaxonomyDecision::Unresolved {
        reasoning: UNRESOLVED_REASONING.to_string(),
    }
}

/// Identifier that is present and really in the catalog
fn valid_id(id: Option<&str>, catalog: &[CatalogEntry], field: &str) -> Option<String> {
    let id = non_blank(id)?;
    if catalog_contains(catalog, &id) {
        Some(id)
    } else {
        tracing::warn!(
            field = field,
            id = %id,
            catalog_size = catalog.len(),
            "Model returned an identifier that is not in the catalog, ignoring it"
        );
        None
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
