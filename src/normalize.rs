//! Text normalization for matching decisions.
//!
//! All matching in this crate is case- and accent-insensitive. This module
//! provides the two normalization primitives everything else builds on:
//! diacritic stripping and full normalization (strip, trim, lowercase).

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritics from a string via Unicode NFD decomposition.
///
/// Applies NFD decomposition and removes combining marks
/// (`General_Category = Mark`), so precomposed characters like U+00E9
/// (e-acute) become their bare base letter.
///
/// Returns [`Cow::Borrowed`] when no modification is needed (ASCII input, or
/// non-ASCII input that carries no combining marks after decomposition).
/// Only allocates when characters are actually removed.
///
/// # Examples
///
/// ```
/// use suggestrank::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Caf\u{00E9}"), "Cafe");
/// assert_eq!(strip_diacritics("Manzana"), "Manzana");
/// assert!(matches!(strip_diacritics("Manzana"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn strip_diacritics(value: &str) -> Cow<'_, str> {
    // Fast path: ASCII strings never contain combining marks.
    if value.is_ascii() {
        return Cow::Borrowed(value);
    }

    let stripped: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();

    if stripped == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(stripped)
    }
}

/// Normalize a string for matching: strip diacritics, trim, lowercase.
///
/// This defines the total order used by every matching decision in the
/// crate: two names are "the same" iff their normalized forms are equal.
///
/// # Examples
///
/// ```
/// use suggestrank::normalize_text;
///
/// assert_eq!(normalize_text("  Caf\u{00E9}  "), "cafe");
/// assert_eq!(normalize_text("LECHE"), "leche");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(value: &str) -> String {
    strip_diacritics(value).trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_precomposed_accent() {
        let result = strip_diacritics("caf\u{00E9}");
        assert_eq!(result, "cafe");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn strips_combining_acute_accent() {
        // "cafe" + U+0301 COMBINING ACUTE ACCENT -> "cafe"
        let result = strip_diacritics("cafe\u{0301}");
        assert_eq!(result, "cafe");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn ascii_returns_borrowed() {
        let result = strip_diacritics("cafe");
        assert_eq!(result, "cafe");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn empty_string_returns_borrowed() {
        let result = strip_diacritics("");
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn non_ascii_without_marks_returns_borrowed() {
        // CJK characters decompose to themselves under NFD.
        let result = strip_diacritics("\u{4e16}\u{754c}");
        assert_eq!(result, "\u{4e16}\u{754c}");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn strips_tilde_and_diaeresis() {
        // U+00F1 = n with tilde, U+00FC = u with diaeresis
        assert_eq!(strip_diacritics("ma\u{00F1}ana \u{00FC}ber"), "manana uber");
    }

    #[test]
    fn strips_stacked_combining_marks() {
        // 'a' + grave + acute -> "a"
        assert_eq!(strip_diacritics("a\u{0300}\u{0301}"), "a");
    }

    #[test]
    fn normalize_strips_trims_and_lowercases() {
        assert_eq!(normalize_text("  Caf\u{00E9}  "), "cafe");
    }

    #[test]
    fn normalize_lowercase_only() {
        assert_eq!(normalize_text("MILK"), "milk");
    }

    #[test]
    fn normalize_whitespace_only_is_empty() {
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn normalize_interior_whitespace_preserved() {
        assert_eq!(normalize_text("Dulce de Leche"), "dulce de leche");
    }

    #[test]
    fn normalized_accent_insensitive_equality() {
        assert_eq!(normalize_text("Caf\u{00E9}"), normalize_text("CAFE"));
    }
}
