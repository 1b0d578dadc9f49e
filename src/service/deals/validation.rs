//! Validation of model answers for deal extraction
//!
//! Turns raw model text into a [`ValidatedExtraction`] or a terminal error.
//! Malformed list entries are dropped one by one here; the grading path rejects
//! the whole answer instead.

use crate::model::extracted::ExtractedDeal;
use crate::model::{
    CatalogEntry, DominantConstraint, ReadinessState, Risk, Stage, Stakeholder,
    ValidatedExtraction,
};
use crate::service::error::ExtractionError;
use crate::service::membership::validate_membership;
use crate::service::normalize::{
    FieldWarnings, filter_entries, normalize_enum, optional_text, string_entries,
    text_or_placeholder,
};
use crate::service::response::parse_model_response;
use crate::service::taxonomy::resolve_taxonomy;

pub const NAME_PLACEHOLDER: &str = "Untitled deal";
pub const SUMMARY_PLACEHOLDER: &str = "No summary extracted.";
pub const DESCRIPTION_PLACEHOLDER: &str = "No description extracted.";
pub const NEXT_STEP_PLACEHOLDER: &str = "No next step identified.";

/// Catalogs and defaults a deal answer is validated against
#[derive(Debug, Clone, Copy, Default)]
pub struct DealCatalogs<'a> {
    pub opportunity_types: &'a [CatalogEntry],
    pub lgas: &'a [CatalogEntry],
    pub default_lga_id: Option<&'a str>,
}

/// Extract, shape-check and normalize a raw deal answer
pub fn validate_deal_response(
    raw: &str,
    catalogs: DealCatalogs<'_>,
) -> Result<ValidatedExtraction, ExtractionError> {
    let extracted: ExtractedDeal = parse_model_response(raw)?;
    Ok(normalize_deal(extracted, catalogs))
}

/// Normalize a shape-checked deal answer into a validated record
pub fn normalize_deal(extracted: ExtractedDeal, catalogs: DealCatalogs<'_>) -> ValidatedExtraction {
    let mut warnings = FieldWarnings::new();

    let stage: Stage = normalize_enum(extracted.stage.as_ref(), &mut warnings);
    let readiness_state: ReadinessState =
        normalize_enum(extracted.readiness_state.as_ref(), &mut warnings);
    let dominant_constraint: DominantConstraint =
        normalize_enum(extracted.dominant_constraint.as_ref(), &mut warnings);

    let stakeholders: Vec<Stakeholder> =
        filter_entries("stakeholders", extracted.stakeholders, |s: &Stakeholder| {
            !s.name.trim().is_empty() && !s.role.trim().is_empty()
        });
    let risks: Vec<Risk> = filter_entries("risks", extracted.risks, |r: &Risk| {
        !r.title.trim().is_empty() && !r.description.trim().is_empty()
    });

    let opportunity_type = resolve_taxonomy(
        extracted.opportunity_type.as_ref(),
        catalogs.opportunity_types,
    );

    let proposed_lga_ids = string_entries("suggestedLgaIds", extracted.suggested_lga_ids);
    let membership =
        validate_membership(&proposed_lga_ids, catalogs.lgas, catalogs.default_lga_id);
    if membership.fallback_applied {
        let problem = if proposed_lga_ids.is_empty() {
            "no LGA proposed".to_string()
        } else {
            format!("none of [{}] is a known LGA", proposed_lga_ids.join(", "))
        };
        warnings.record_default("suggestedLgaIds", &problem, &membership.ids.join(", "));
    }

    ValidatedExtraction {
        name: text_or_placeholder(extracted.name.as_ref(), NAME_PLACEHOLDER),
        stage,
        readiness_state,
        dominant_constraint,
        summary: text_or_placeholder(extracted.summary.as_ref(), SUMMARY_PLACEHOLDER),
        description: text_or_placeholder(extracted.description.as_ref(), DESCRIPTION_PLACEHOLDER),
        next_step: text_or_placeholder(extracted.next_step.as_ref(), NEXT_STEP_PLACEHOLDER),
        location_text: optional_text(extracted.location_text.as_ref()),
        investment_value: optional_text(extracted.investment_value.as_ref()),
        economic_impact: optional_text(extracted.economic_impact.as_ref()),
        stakeholders: stakeholders.into_iter().map(trim_stakeholder).collect(),
        risks: risks.into_iter().map(trim_risk).collect(),
        strategic_actions: string_entries("strategicActions", extracted.strategic_actions),
        opportunity_type,
        lga_ids: membership.ids,
        warnings: warnings.into_vec(),
    }
}

fn trim_stakeholder(s: Stakeholder) -> Stakeholder {
    Stakeholder {
        name: s.name.trim().to_string(),
        role: s.role.trim().to_string(),
    }
}

fn trim_risk(r: Risk) -> Risk {
    Risk {
        title: r.title.trim().to_string(),
        description: r.description.trim().to_string(),
    }
}
