use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use utoipa::ToSchema;

use crate::model::closed_set::ClosedSet;

/// Letter grade, ordered best to worst
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
#[strum(ascii_case_insensitive)]
pub enum GradeLetter {
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BMinus,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    D,
}

impl ClosedSet for GradeLetter {
    const FIELD: &'static str = "gradeLetter";
    // Midpoint of the scale: a failed answer must not read as excellent or failing.
    const DEFAULT: Self = GradeLetter::B;
}

/// One of the six fixed rubric dimensions of a strategy blueprint
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
pub enum BlueprintComponent {
    RegionalContext,
    PrioritySectors,
    InvestmentPipeline,
    EnablingInfrastructure,
    GovernanceAndDelivery,
    MeasurementAndEvaluation,
}

impl BlueprintComponent {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn title(self) -> &'static str {
        match self {
            BlueprintComponent::RegionalContext => "Regional context and baseline",
            BlueprintComponent::PrioritySectors => "Priority sectors and opportunities",
            BlueprintComponent::InvestmentPipeline => "Investment pipeline",
            BlueprintComponent::EnablingInfrastructure => "Enabling infrastructure",
            BlueprintComponent::GovernanceAndDelivery => "Governance and delivery",
            BlueprintComponent::MeasurementAndEvaluation => "Measurement and evaluation",
        }
    }

    /// What the rubric expects a strong answer for this dimension to contain
    pub fn rubric(self) -> &'static str {
        match self {
            BlueprintComponent::RegionalContext => {
                "Evidence-based description of the region's economy, demographics, comparative advantages and structural weaknesses."
            }
            BlueprintComponent::PrioritySectors => {
                "A short list of priority sectors chosen with explicit criteria, each tied to regional advantages."
            }
            BlueprintComponent::InvestmentPipeline => {
                "Named projects or opportunities with stage, scale and the constraint blocking each one."
            }
            BlueprintComponent::EnablingInfrastructure => {
                "Specific infrastructure, land, energy, water or workforce enablers linked to the priority sectors."
            }
            BlueprintComponent::GovernanceAndDelivery => {
                "Clear ownership, decision rights, funding sources and a delivery timetable."
            }
            BlueprintComponent::MeasurementAndEvaluation => {
                "Measurable targets, baselines and a review cadence for every priority."
            }
        }
    }
}

/// The six free-text bodies of a strategy document, one per rubric dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrategyComponents {
    #[serde(default)]
    pub regional_context: String,
    #[serde(default)]
    pub priority_sectors: String,
    #[serde(default)]
    pub investment_pipeline: String,
    #[serde(default)]
    pub enabling_infrastructure: String,
    #[serde(default)]
    pub governance_and_delivery: String,
    #[serde(default)]
    pub measurement_and_evaluation: String,
}

impl StrategyComponents {
    pub fn body(&self, component: BlueprintComponent) -> &str {
        match component {
            BlueprintComponent::RegionalContext => &self.regional_context,
            BlueprintComponent::PrioritySectors => &self.priority_sectors,
            BlueprintComponent::InvestmentPipeline => &self.investment_pipeline,
            BlueprintComponent::EnablingInfrastructure => &self.enabling_infrastructure,
            BlueprintComponent::GovernanceAndDelivery => &self.governance_and_delivery,
            BlueprintComponent::MeasurementAndEvaluation => &self.measurement_and_evaluation,
        }
    }
}

/// Optional auxiliary context for grading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GradingContext {
    #[serde(default)]
    pub strategy_title: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingElement {
    pub component_id: String,
    pub reason: String,
}

/// Graded strategy record
///
/// `evidence` always holds all six component keys.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub grade_letter: GradeLetter,
    pub rationale: String,
    #[schema(value_type = Object)]
    pub evidence: BTreeMap<BlueprintComponent, String>,
    pub missing_elements: Vec<MissingElement>,
    pub scope_discipline_notes: String,
    pub warnings: Vec<String>,
}
