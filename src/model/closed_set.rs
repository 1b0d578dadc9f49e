//! Shared behaviour of the fixed enumerations the model must choose from

use std::str::FromStr;

use strum::IntoEnumIterator;

/// A closed set of wire values with a documented fallback.
///
/// Implementors are plain strum enums; the wire id of each variant is its
/// kebab-case (or explicitly renamed) strum serialization.
pub trait ClosedSet: Copy + FromStr + IntoEnumIterator + Into<&'static str> {
    /// Wire key of the field this set populates, used in warnings.
    const FIELD: &'static str;

    /// Value substituted when the model answer is absent or out of set.
    const DEFAULT: Self;

    fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every wire id in declaration order.
    fn allowed_values() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }

    /// Trimmed, ASCII case-insensitive lookup.
    fn lookup(raw: &str) -> Option<Self> {
        Self::from_str(raw.trim()).ok()
    }
}
