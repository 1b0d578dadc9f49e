//! Prompts for strategy grading

use std::borrow::Cow;

use strum::IntoEnumIterator;

use crate::model::{BlueprintComponent, GradeLetter, GradingContext, StrategyComponents};
use crate::service::prompt::render_closed_set;
use crate::service::text::truncate_document;

/// System prompt for strategy grading
pub const STRATEGY_GRADING_SYSTEM_PROMPT: &str = r#"You are a reviewer of regional economic development strategies.

Your role is to grade a strategy blueprint against a fixed rubric of six
components and to cite the evidence you relied on for each one.

You must:
- Grade only on what the strategy text actually says
- Quote or closely paraphrase the strategy as evidence for every component
- Name each element the rubric expects that the strategy does not provide
- Note where the strategy strays beyond the scope of regional economic development

Do not:
- Reward length, ambition, or polish in place of substance
- Assume content that is not written down

Your output must be a single JSON object only, with no commentary."#;

/// Rendered in place of a component the strategy leaves blank
const EMPTY_COMPONENT: &str = "(not provided)";

/// Build the grading prompt for a strategy
///
/// Each component body is truncated on its own, so one oversized section cannot
/// crowd out the others.
pub fn build_grading_prompt(components: &StrategyComponents, context: &GradingContext) -> String {
    let mut context_lines = Vec::new();
    if let Some(title) = non_blank(context.strategy_title.as_deref()) {
        context_lines.push(format!("- Strategy: {}", title));
    }
    if let Some(region) = non_blank(context.region.as_deref()) {
        context_lines.push(format!("- Region: {}", region));
    }
    if let Some(notes) = non_blank(context.notes.as_deref()) {
        context_lines.push(format!("- Notes: {}", notes));
    }
    let context_section = if context_lines.is_empty() {
        String::new()
    } else {
        format!("## Context\n\n{}\n\n", context_lines.join("\n"))
    };

    let mut rubric = String::new();
    let mut sections = String::new();
    for component in BlueprintComponent::iter() {
        rubric.push_str(&format!(
            "- \"{}\" ({}): {}\n",
            component.as_str(),
            component.title(),
            component.rubric()
        ));

        let body = components.body(component);
        let body = if body.trim().is_empty() {
            Cow::Borrowed(EMPTY_COMPONENT)
        } else {
            truncate_document(body)
        };
        sections.push_str(&format!(
            "### {} [{}]\n\n{}\n\n",
            component.title(),
            component.as_str(),
            body
        ));
    }

    let evidence_template = BlueprintComponent::iter()
        .map(|c| format!("    \"{}\": \"evidence quoted from that component\"", c.as_str()))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"Grade the strategy blueprint below against the rubric.

{context_section}## Rubric

{rubric}
## Strategy Components

{sections}---

## Allowed Values

- gradeLetter: {grades} (best to worst)

### Required Output

Return one JSON object with these keys:

{{
  "gradeLetter": one of the gradeLetter values,
  "gradeRationale": "why the strategy earns this grade",
  "evidenceByComponent": {{
{evidence_template}
  }},
  "missingElements": [{{ "componentId": "component id from the rubric", "reason": "what is missing" }}],
  "scopeDisciplineNotes": "where the strategy strays outside its scope, if anywhere"
}}

Output JSON only."#,
        context_section = context_section,
        rubric = rubric,
        sections = sections,
        grades = render_closed_set::<GradeLetter>(),
        evidence_template = evidence_template,
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::text::{MAX_DOCUMENT_CHARS, TRUNCATION_MARKER};

    fn components() -> StrategyComponents {
        StrategyComponents {
            regional_context: "Mackay is a resources and agriculture hub.".to_string(),
            priority_sectors: "METS, biofutures, tourism.".to_string(),
            ..StrategyComponents::default()
        }
    }

    #[test]
    fn test_prompt_has_every_component_and_rubric_line() {
        let prompt = build_grading_prompt(&components(), &GradingContext::default());

        for component in BlueprintComponent::iter() {
            assert!(prompt.contains(&format!("[{}]", component.as_str())));
            assert!(prompt.contains(component.rubric()));
        }
        assert!(prompt.contains("Mackay is a resources and agriculture hub."));
        assert!(prompt.contains("\"A\" | \"A-\" | \"B+\""));
    }

    #[test]
    fn test_blank_components_are_marked() {
        let prompt = build_grading_prompt(&components(), &GradingContext::default());

        assert_eq!(prompt.matches(EMPTY_COMPONENT).count(), 4);
    }

    #[test]
    fn test_context_section_only_when_given() {
        let without = build_grading_prompt(&components(), &GradingContext::default());
        assert!(!without.contains("## Context"));

        let context = GradingContext {
            strategy_title: Some("Greater Whitsunday 2035".to_string()),
            region: Some("Mackay-Isaac-Whitsunday".to_string()),
            notes: Some("  ".to_string()),
        };
        let with = build_grading_prompt(&components(), &context);
        assert!(with.contains("- Strategy: Greater Whitsunday 2035"));
        assert!(with.contains("- Region: Mackay-Isaac-Whitsunday"));
        assert!(!with.contains("- Notes:"));
    }

    #[test]
    fn test_each_component_is_truncated_independently() {
        let components = StrategyComponents {
            regional_context: "r".repeat(MAX_DOCUMENT_CHARS + 1),
            investment_pipeline: "p".repeat(MAX_DOCUMENT_CHARS + 5),
            ..components()
        };
        let prompt = build_grading_prompt(&components, &GradingContext::default());

        assert_eq!(prompt.matches(TRUNCATION_MARKER).count(), 2);
        assert!(prompt.contains("METS, biofutures, tourism."));
    }
}
