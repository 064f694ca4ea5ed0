//! Per-character highlight runs for rendering a matched name.
//!
//! The UI emphasizes the parts of a suggested name that the query actually
//! matched. Matching happens on the accent-stripped, lowercased form, but
//! the runs are expressed over the original (possibly accented) name, so a
//! stripped-index to original-index position map is built first. The
//! concatenation of all run texts always reproduces the original name
//! byte for byte.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::classify::MatchTier;
use crate::normalize::normalize_text;

/// One contiguous run of a display name, flagged as matched or unmatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    /// The run's text, sliced from the original name.
    pub text: String,
    /// Whether this run was matched by the query.
    pub matched: bool,
}

/// The accent-stripped, lowercased projection of a name, with a map from
/// each projected character back to the original character it came from.
struct StrippedName {
    /// Projected characters (stripped, lowercased).
    chars: Vec<char>,
    /// For each projected character, the index of the original character
    /// that produced it. One original character may produce several
    /// projected characters (multi-char lowercasings) or none at all
    /// (bare combining marks).
    origin: Vec<usize>,
    /// Original characters whose projection is empty (bare combining
    /// marks). These inherit the matched flag of the preceding character
    /// so an accent never splits its base character's run.
    bare_mark: Vec<bool>,
}

impl StrippedName {
    fn build(original: &[char]) -> Self {
        let mut chars = Vec::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        let mut bare_mark = vec![false; original.len()];

        for (index, &c) in original.iter().enumerate() {
            let before = chars.len();
            for decomposed in std::iter::once(c).nfd().filter(|d| !is_combining_mark(*d)) {
                for lowered in decomposed.to_lowercase() {
                    chars.push(lowered);
                    origin.push(index);
                }
            }
            if chars.len() == before {
                bare_mark[index] = true;
            }
        }

        Self {
            chars,
            origin,
            bare_mark,
        }
    }

    /// First projected index where `query` occurs contiguously, if any.
    fn find_contiguous(&self, query: &[char]) -> Option<usize> {
        if query.is_empty() || query.len() > self.chars.len() {
            return None;
        }
        (0..=self.chars.len() - query.len())
            .find(|&start| self.chars[start..start + query.len()] == *query)
    }
}

/// Split an original name into matched/unmatched runs for a given tier.
///
/// - [`MatchTier::Exact`]: the whole name is one matched run.
/// - [`MatchTier::Partial`]: the first contiguous occurrence of the
///   normalized query in the stripped name is marked.
/// - [`MatchTier::Fuzzy`]: the same greedy subsequence alignment used for
///   classification is re-run over the stripped name, marking each aligned
///   character.
///
/// When nothing ends up marked (a defensive case; the pipeline only calls
/// this for names that already classified at the given tier), the whole
/// name comes back as a single unmatched run.
///
/// # Examples
///
/// ```
/// use suggestrank::{HighlightSegment, MatchTier, highlight_segments};
///
/// let segments = highlight_segments("Dulce de Leche", "leche", MatchTier::Partial);
/// assert_eq!(
///     segments,
///     vec![
///         HighlightSegment { text: "Dulce de ".to_owned(), matched: false },
///         HighlightSegment { text: "Leche".to_owned(), matched: true },
///     ]
/// );
///
/// // Segments always reassemble the accented original.
/// let segments = highlight_segments("Caf\u{00E9}", "cafe", MatchTier::Exact);
/// let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(joined, "Caf\u{00E9}");
/// ```
pub fn highlight_segments(
    original: &str,
    raw_query: &str,
    tier: MatchTier,
) -> Vec<HighlightSegment> {
    if original.is_empty() {
        return Vec::new();
    }

    if tier == MatchTier::Exact {
        return vec![HighlightSegment {
            text: original.to_owned(),
            matched: true,
        }];
    }

    let original_chars: Vec<char> = original.chars().collect();
    let stripped = StrippedName::build(&original_chars);
    let query: Vec<char> = normalize_text(raw_query).chars().collect();

    let mut matched = vec![false; original_chars.len()];

    match tier {
        // Exact returned above.
        MatchTier::Exact => {}
        MatchTier::Partial => {
            if let Some(start) = stripped.find_contiguous(&query) {
                for stripped_index in start..start + query.len() {
                    matched[stripped.origin[stripped_index]] = true;
                }
            }
        }
        MatchTier::Fuzzy => {
            let mut query_iter = query.iter();
            let mut next = query_iter.next();
            for (stripped_index, &c) in stripped.chars.iter().enumerate() {
                match next {
                    Some(&q) if q == c => {
                        matched[stripped.origin[stripped_index]] = true;
                        next = query_iter.next();
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    // Accents that stripped away entirely stay with their base character.
    for index in 1..original_chars.len() {
        if stripped.bare_mark[index] {
            matched[index] = matched[index - 1];
        }
    }

    if !matched.iter().any(|&m| m) {
        return vec![HighlightSegment {
            text: original.to_owned(),
            matched: false,
        }];
    }

    coalesce(&original_chars, &matched)
}

/// Merge consecutive characters sharing a matched flag into runs.
fn coalesce(chars: &[char], matched: &[bool]) -> Vec<HighlightSegment> {
    let mut segments: Vec<HighlightSegment> = Vec::new();
    for (&c, &flag) in chars.iter().zip(matched) {
        match segments.last_mut() {
            Some(last) if last.matched == flag => last.text.push(c),
            _ => segments.push(HighlightSegment {
                text: c.to_string(),
                matched: flag,
            }),
        }
    }
    segments
}
