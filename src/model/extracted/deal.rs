use serde::Deserialize;
use serde_json::Value;

/// Deal answer as returned by the model
///
/// List fields must be arrays when present; their entries are checked one by
/// one later and malformed entries are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDeal {
    pub name: Option<Value>,
    pub stage: Option<Value>,
    pub readiness_state: Option<Value>,
    pub dominant_constraint: Option<Value>,
    pub summary: Option<Value>,
    pub description: Option<Value>,
    pub next_step: Option<Value>,
    pub location_text: Option<Value>,
    pub investment_value: Option<Value>,
    pub economic_impact: Option<Value>,
    pub stakeholders: Option<Vec<Value>>,
    pub risks: Option<Vec<Value>>,
    pub strategic_actions: Option<Vec<Value>>,
    pub opportunity_type: Option<ExtractedOpportunityType>,
    pub suggested_lga_ids: Option<Vec<Value>>,
}

/// Classification payload for the deal's opportunity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedOpportunityType {
    pub existing_id: Option<String>,
    pub proposed_name: Option<String>,
    pub proposed_definition: Option<String>,
    pub closest_existing_id: Option<String>,
    pub closest_reasoning: Option<String>,
}
