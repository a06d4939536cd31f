//! Text cleanup for service-supplied titles and names

/// Normalize a raw title or name from the service.
///
/// The catalog stores some kana with the combining (semi-)voiced sound marks
/// (U+3099/U+309A), which render incorrectly in plain-text contexts; they are
/// swapped for their standalone spacing forms (U+309B/U+309C). Zero-width
/// spaces (U+200B) are stripped. No other transformation is applied.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{3099}' => Some('\u{309B}'),
            '\u{309A}' => Some('\u{309C}'),
            '\u{200B}' => None,
            other => Some(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_combining_marks() {
        let result = sanitize("ハ\u{3099}ハ\u{309A}");
        assert_eq!(result, "ハ\u{309B}ハ\u{309C}");
        assert!(!result.contains('\u{3099}'));
        assert!(!result.contains('\u{309A}'));
    }

    #[test]
    fn test_sanitize_strips_zero_width_spaces() {
        assert_eq!(sanitize("fo\u{200B}o\u{200B}"), "foo");
    }

    #[test]
    fn test_sanitize_leaves_ordinary_text_alone() {
        assert_eq!(sanitize("Renai Circulation (TV Size)"), "Renai Circulation (TV Size)");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize("デ\u{3099}\u{200B}ュオ");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_sanitize_no_trimming_or_case_changes() {
        assert_eq!(sanitize("  MiXeD Case  "), "  MiXeD Case  ");
    }
}
