use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use utoipa::ToSchema;

use crate::model::catalog::CatalogEntry;
use crate::model::closed_set::ClosedSet;
use crate::model::taxonomy::TaxonomyDecision;

/// Pipeline stage of a deal
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Stage {
    Definition,
    PreFeasibility,
    Feasibility,
    Structuring,
    TransactionClose,
}

impl ClosedSet for Stage {
    const FIELD: &'static str = "stage";
    const DEFAULT: Self = Stage::Definition;
}

/// Readiness ladder, ordered from least to most mature
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ReadinessState {
    NoViableProjects,
    ConceptualInterest,
    FeasibilityUnderway,
    StructurableButStalled,
    InvestableWithMinorIntervention,
    ScalingAndReplicable,
}

impl ClosedSet for ReadinessState {
    const FIELD: &'static str = "readinessState";
    const DEFAULT: Self = ReadinessState::ConceptualInterest;
}

/// Primary blocker preventing a deal from progressing
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DominantConstraint {
    RevenueCertainty,
    OfftakeDemandAggregation,
    PlanningAndApprovals,
    SponsorCapability,
    EarlyRiskCapital,
    BalanceSheetConstraints,
    TechnologyRisk,
    CoordinationFailure,
    SkillsAndWorkforceConstraint,
    CommonUserInfrastructureGap,
}

impl ClosedSet for DominantConstraint {
    const FIELD: &'static str = "dominantConstraint";
    const DEFAULT: Self = DominantConstraint::CoordinationFailure;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Risk {
    pub title: String,
    pub description: String,
}

/// Input of a single deal extraction call
///
/// A catalog left as `None` is omitted from the prompt entirely; `Some(vec![])`
/// is rendered as an explicit "empty" sentinel.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ExtractionRequest {
    pub document_text: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub opportunity_types: Option<Vec<CatalogEntry>>,
    #[serde(default)]
    pub lgas: Option<Vec<CatalogEntry>>,
}

impl ExtractionRequest {
    pub fn new(document_text: impl Into<String>) -> Self {
        Self {
            document_text: document_text.into(),
            ..Self::default()
        }
    }
}

/// Deal record produced from an investment memo
///
/// Enumerated fields are Rust enums, so an out-of-set value cannot be
/// represented. `warnings` has one entry per field that fell back to a default.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedExtraction {
    pub name: String,
    pub stage: Stage,
    pub readiness_state: ReadinessState,
    pub dominant_constraint: DominantConstraint,
    pub summary: String,
    pub description: String,
    pub next_step: String,
    pub location_text: Option<String>,
    pub investment_value: Option<String>,
    pub economic_impact: Option<String>,
    pub stakeholders: Vec<Stakeholder>,
    pub risks: Vec<Risk>,
    pub strategic_actions: Vec<String>,
    pub opportunity_type: TaxonomyDecision,
    pub lga_ids: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidatedExtraction {
    /// Render the record back into the answer shape the model is asked for.
    ///
    /// Feeding this through response validation again reproduces the record.
    pub fn to_model_json(&self) -> Value {
        json!({
            "name": self.name,
            "stage": self.stage.as_str(),
            "readinessState": self.readiness_state.as_str(),
            "dominantConstraint": self.dominant_constraint.as_str(),
            "summary": self.summary,
            "description": self.description,
            "nextStep": self.next_step,
            "locationText": self.location_text,
            "investmentValue": self.investment_value,
            "economicImpact": self.economic_impact,
            "stakeholders": self.stakeholders,
            "risks": self.risks,
            "strategicActions": self.strategic_actions,
            "opportunityType": self.opportunity_type.to_model_json(),
            "suggestedLgaIds": self.lga_ids,
        })
    }
}
