//! Field-level normalization of model answers
//!
//! Enumerated fields are forced into their closed sets with a warning per
//! substituted default. Free text falls back to placeholders silently, and
//! list entries that are not well typed are dropped one by one.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::ClosedSet;
use crate::service::response::json_type_name;

/// Audit trail of fields that fell back to a default
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldWarnings {
    warnings: Vec<String>,
}

impl FieldWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `field` was replaced by `default` because of `problem`
    pub fn record_default(&mut self, field: &str, problem: &str, default: &str) {
        self.warnings.push(format!(
            "{}: {}; defaulted to '{}'",
            field, problem, default
        ));
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.warnings
    }
}

/// Resolve an enumerated field, defaulting (with a warning) when the value is
/// absent, not a string, or not a member of the set.
pub fn normalize_enum<T: ClosedSet>(value: Option<&Value>, warnings: &mut FieldWarnings) -> T {
    let problem = match value {
        None => "missing value".to_string(),
        Some(Value::String(raw)) => match T::lookup(raw) {
            Some(member) => return member,
            None => format!(
                "'{}' is not one of {}",
                raw.chars().take(80).collect::<String>(),
                T::allowed_values().join(", ")
            ),
        },
        Some(other) => format!("expected a string, got {}", json_type_name(other)),
    };

    warnings.record_default(T::FIELD, &problem, T::DEFAULT.as_str());
    T::DEFAULT
}

/// Trimmed non-blank string, or `None` for anything else
pub fn optional_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        _ => None,
    }
}

/// Trimmed non-blank string, or `placeholder`. Placeholders are not warnings.
pub fn text_or_placeholder(value: Option<&Value>, placeholder: &str) -> String {
    optional_text(value).unwrap_or_else(|| placeholder.to_string())
}

/// Keep the list entries that deserialize into `T` and pass `keep`
///
/// Malformed entries are dropped individually; the rest of the list survives.
pub fn filter_entries<T, F>(field: &str, entries: Option<Vec<Value>>, keep: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    let entries = entries.unwrap_or_default();
    let total = entries.len();

    let kept: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<T>(entry).ok())
        .filter(|entry| keep(entry))
        .collect();

    if kept.len() < total {
        tracing::debug!(
            field = field,
            total_entries = total,
            kept_entries = kept.len(),
            "Dropped malformed list entries"
        );
    }

    kept
}

/// Trimmed non-blank strings of a list; other entries are dropped
pub fn string_entries(field: &str, entries: Option<Vec<Value>>) -> Vec<String> {
    filter_entries::<String, _>(field, entries, |s| !s.trim().is_empty())
        .into_iter()
        .map(|s| s.trim().to_string())
        .collect()
}
