//! Deterministic bounding of document text before prompting

use std::borrow::Cow;

/// Maximum number of characters of a document sent to the model
pub const MAX_DOCUMENT_CHARS: usize = 30_000;

/// Appended after the kept prefix of an over-long document
pub const TRUNCATION_MARKER: &str = "\n\n[Document truncated at 30000 characters]";

/// Truncate `text` to [`MAX_DOCUMENT_CHARS`] characters and append the marker.
///
/// Input of at most the threshold is returned unchanged. Lengths are counted in
/// chars, so a multi-byte code point is never split.
pub fn truncate_document(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_DOCUMENT_CHARS) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            tracing::debug!(
                original_length = text.chars().count(),
                kept_chars = MAX_DOCUMENT_CHARS,
                "Truncating document before prompting"
            );
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            Cow::Owned(truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_passes_through() {
        let text = "A short memo.";
        assert!(matches!(truncate_document(text), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn test_text_at_threshold_is_untouched() {
        let text = "a".repeat(MAX_DOCUMENT_CHARS);
        let result = truncate_document(&text);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, text.as_str());
    }

    #[test]
    fn test_text_over_threshold_is_truncated_with_marker() {
        let text = "a".repeat(MAX_DOCUMENT_CHARS + 1);
        let result = truncate_document(&text);

        assert!(result.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            result.chars().count(),
            MAX_DOCUMENT_CHARS + TRUNCATION_MARKER.chars().count()
        );
        assert!(result.starts_with(&text[..MAX_DOCUMENT_CHARS]));
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundary() {
        let text = "é".repeat(MAX_DOCUMENT_CHARS + 10);
        let result = truncate_document(&text);

        let kept: String = result.chars().take(MAX_DOCUMENT_CHARS).collect();
        assert_eq!(kept, "é".repeat(MAX_DOCUMENT_CHARS));
        assert!(result.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_multibyte_text_at_threshold_is_untouched() {
        let text = "€".repeat(MAX_DOCUMENT_CHARS);
        assert_eq!(truncate_document(&text), text.as_str());
    }
}
