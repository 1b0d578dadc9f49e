use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

/// Outcome of open-set category classification
///
/// Exactly one state holds; a valid existing match always wins over a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaxonomyDecision {
    /// The model named an existing catalog entry that really exists
    Matched { id: String },
    /// A new category was proposed alongside a valid closest existing one
    ProposedWithClosest {
        name: String,
        definition: String,
        #[serde(rename = "closestId")]
        closest_id: String,
        #[serde(rename = "closestReasoning")]
        closest_reasoning: String,
    },
    ProposedNew { name: String, definition: String },
    /// Manual classification required
    Unresolved { reasoning: String },
}

impl TaxonomyDecision {
    pub fn matched_id(&self) -> Option<&str> {
        match self {
            TaxonomyDecision::Matched { id } => Some(id),
            _ => None,
        }
    }

    /// Classification payload in the shape the model answers with
    pub fn to_model_json(&self) -> Value {
        match self {
            TaxonomyDecision::Matched { id } => json!({ "existingId": id }),
            TaxonomyDecision::ProposedWithClosest {
                name,
                definition,
                closest_id,
                closest_reasoning,
            } => json!({
                "proposedName": name,
                "proposedDefinition": definition,
                "closestExistingId": closest_id,
                "closestReasoning": closest_reasoning,
            }),
            TaxonomyDecision::ProposedNew { name, definition } => json!({
                "proposedName": name,
                "proposedDefinition": definition,
            }),
            TaxonomyDecision::Unresolved { .. } => json!({}),
        }
    }
}
