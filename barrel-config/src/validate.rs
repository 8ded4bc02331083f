//! Span lookup for validation errors.

use miette::SourceSpan;

/// Find the span of a key or string value in the raw TOML source.
///
/// Keys are matched as `key =`, values as a quoted string. Falls back to
/// the first occurrence anywhere in the source.
pub(crate) fn find_value_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }

    let key_patterns = [format!("{} =", needle), format!("{}=", needle)];
    for pattern in &key_patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos, needle.len())));
        }
    }

    let quoted = [format!("\"{}\"", needle), format!("'{}'", needle)];
    for pattern in &quoted {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, needle.len())));
        }
    }

    src.find(needle)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[barrel]\nname = \"\"\n";
        let span = find_value_span(src, "name").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_quoted_value_span() {
        let src = "[barrel]\ninclude = [\"(bad\"]\n";
        let span = find_value_span(src, "(bad").unwrap();
        assert_eq!(span.offset(), 21);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_missing_needle() {
        assert!(find_value_span("[barrel]\n", "directory").is_none());
        assert!(find_value_span("[barrel]\n", "").is_none());
    }
}
