//! Prompts for deal extraction

use crate::model::{CatalogEntry, DominantConstraint, ReadinessState, Stage};
use crate::service::prompt::{NO_LGAS, NO_OPPORTUNITY_TYPES, render_catalog, render_closed_set};

/// System prompt for deal extraction
pub const DEAL_EXTRACTION_SYSTEM_PROMPT: &str = r#"You are an analyst in a regional economic development agency.

Your task is to read an investment memo and describe the single deal it is about
as a structured record.

You must:
- Base every field strictly on the memo text
- Choose enumerated values only from the lists you are given, copied verbatim
- Reuse an existing opportunity type whenever one fits; propose a new one only when none does
- Use only LGA identifiers from the list you are given

Do not:
- Invent stakeholders, figures, or risks that the memo does not mention
- Invent identifiers that are not in the supplied lists

Your output must be a single JSON object only, with no commentary."#;

/// Build the deal extraction prompt
///
/// A catalog passed as `None` is left out; an empty one renders its sentinel so
/// the model can tell "no entries exist" from "not provided".
pub fn build_deal_prompt(
    document_text: &str,
    label: Option<&str>,
    opportunity_types: Option<&[CatalogEntry]>,
    lgas: Option<&[CatalogEntry]>,
) -> String {
    let title = match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => format!("## Memo: {}", label),
        None => "## Memo".to_string(),
    };

    let opportunity_section = opportunity_types
        .map(|entries| {
            format!(
                "\n## Existing Opportunity Types\n{}\n",
                render_catalog(entries, NO_OPPORTUNITY_TYPES)
            )
        })
        .unwrap_or_default();

    let lga_section = lgas
        .map(|entries| {
            format!(
                "\n## Local Government Areas (LGAs)\n{}\n",
                render_catalog(entries, NO_LGAS)
            )
        })
        .unwrap_or_default();

    format!(
        r#"Extract the deal described in the investment memo below.

{title}

{document_text}

---
{opportunity_section}{lga_section}
## Allowed Values

- stage: {stages}
- readinessState: {readiness}
- dominantConstraint: {constraints}

### Required Output

Return one JSON object with these keys:

{{
  "name": "short deal name",
  "stage": one of the stage values,
  "readinessState": one of the readinessState values,
  "dominantConstraint": one of the dominantConstraint values,
  "summary": "two or three sentence summary",
  "description": "fuller description of the project",
  "nextStep": "the single most important next step",
  "locationText": "place names as written in the memo, or null",
  "investmentValue": "capital value as written in the memo, or null",
  "economicImpact": "jobs or output impact as written in the memo, or null",
  "stakeholders": [{{ "name": "...", "role": "..." }}],
  "risks": [{{ "title": "...", "description": "..." }}],
  "strategicActions": ["..."],
  "opportunityType": {{
    "existingId": "id of a matching existing opportunity type, or null",
    "proposedName": "name of a new opportunity type if none fits, or null",
    "proposedDefinition": "one sentence definition of the proposed type, or null",
    "closestExistingId": "id of the closest existing type to the proposal, or null",
    "closestReasoning": "why that existing type is closest, or null"
  }},
  "suggestedLgaIds": ["ids of the LGAs the deal is located in"]
}}

Guidelines:
- Set existingId only to an id from the Existing Opportunity Types list
- Set suggestedLgaIds only to ids from the LGA list
- Use null or an empty array when the memo does not say

Output JSON only."#,
        title = title,
        document_text = document_text,
        opportunity_section = opportunity_section,
        lga_section = lga_section,
        stages = render_closed_set::<Stage>(),
        readiness = render_closed_set::<ReadinessState>(),
        constraints = render_closed_set::<DominantConstraint>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClosedSet;

    #[test]
    fn test_prompt_lists_every_closed_set_value() {
        let prompt = build_deal_prompt("memo", None, None, None);

        for value in Stage::allowed_values()
            .into_iter()
            .chain(ReadinessState::allowed_values())
            .chain(DominantConstraint::allowed_values())
        {
            assert!(prompt.contains(&format!("\"{}\"", value)), "missing {}", value);
        }
    }

    #[test]
    fn test_omitted_catalogs_have_no_section() {
        let prompt = build_deal_prompt("memo", None, None, None);

        assert!(!prompt.contains("## Existing Opportunity Types"));
        assert!(!prompt.contains("## Local Government Areas"));
        assert!(!prompt.contains(NO_OPPORTUNITY_TYPES));
    }

    #[test]
    fn test_empty_catalogs_render_sentinels() {
        let prompt = build_deal_prompt("memo", None, Some(&[]), Some(&[]));

        assert!(prompt.contains("## Existing Opportunity Types\n(no existing types)"));
        assert!(prompt.contains("## Local Government Areas (LGAs)\n(no LGAs)"));
    }

    #[test]
    fn test_catalog_entries_and_document_are_embedded() {
        let types = vec![CatalogEntry::new("critical-minerals", "Critical minerals")];
        let lgas = vec![CatalogEntry::new("mackay", "Mackay Regional")];
        let prompt = build_deal_prompt(
            "Vanadium refinery near Mackay.",
            Some("refinery-memo.pdf"),
            Some(&types),
            Some(&lgas),
        );

        assert!(prompt.contains("## Memo: refinery-memo.pdf"));
        assert!(prompt.contains("Vanadium refinery near Mackay."));
        assert!(prompt.contains("\"critical-minerals\" — Critical minerals"));
        assert!(prompt.contains("\"mackay\" — Mackay Regional"));
    }
}
