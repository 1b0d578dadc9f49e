//! Shared prompt composition helpers

use crate::model::{CatalogEntry, ClosedSet};

/// Rendered in place of an empty opportunity type catalog
pub const NO_OPPORTUNITY_TYPES: &str = "(no existing types)";
/// Rendered in place of an empty LGA catalog
pub const NO_LGAS: &str = "(no LGAs)";

/// Render catalog entries one per line as `"<id>" — <name>[: <definition>]`,
/// or `empty_sentinel` when the catalog has no entries.
pub fn render_catalog(entries: &[CatalogEntry], empty_sentinel: &str) -> String {
    if entries.is_empty() {
        return empty_sentinel.to_string();
    }

    entries
        .iter()
        .map(|entry| match entry.definition.as_deref().map(str::trim) {
            Some(definition) if !definition.is_empty() => {
                format!("\"{}\" — {}: {}", entry.id, entry.name, definition)
            }
            _ => format!("\"{}\" — {}", entry.id, entry.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every value of a closed set, quoted and separated by ` | `
pub fn render_closed_set<T: ClosedSet>() -> String {
    T::allowed_values()
        .iter()
        .map(|value| format!("\"{}\"", value))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradeLetter, Stage};

    #[test]
    fn test_render_catalog_lines() {
        let entries = vec![
            CatalogEntry::new("critical-minerals", "Critical minerals")
                .with_definition("Extraction and processing of critical minerals"),
            CatalogEntry::new("tourism", "Tourism"),
        ];

        assert_eq!(
            render_catalog(&entries, NO_OPPORTUNITY_TYPES),
            "\"critical-minerals\" — Critical minerals: Extraction and processing of critical minerals\n\"tourism\" — Tourism"
        );
    }

    #[test]
    fn test_empty_catalog_renders_sentinel() {
        assert_eq!(render_catalog(&[], NO_OPPORTUNITY_TYPES), "(no existing types)");
        assert_eq!(render_catalog(&[], NO_LGAS), "(no LGAs)");
    }

    #[test]
    fn test_blank_definition_is_omitted() {
        let entries = vec![CatalogEntry::new("mackay", "Mackay Regional").with_definition("  ")];
        assert_eq!(render_catalog(&entries, NO_LGAS), "\"mackay\" — Mackay Regional");
    }

    #[test]
    fn test_render_closed_set() {
        assert_eq!(
            render_closed_set::<Stage>(),
            "\"definition\" | \"pre-feasibility\" | \"feasibility\" | \"structuring\" | \"transaction-close\""
        );
        assert_eq!(
            render_closed_set::<GradeLetter>(),
            "\"A\" | \"A-\" | \"B+\" | \"B\" | \"B-\" | \"C\" | \"D\""
        );
    }
}
