//! Order-preserving character-subsequence matching.
//!
//! The "fuzzy" match tier accepts a candidate when every query character
//! appears in the candidate in order, not necessarily contiguously:
//! query `"mzn"` matches `"manzana"`.

/// Returns whether `query` is an order-preserving subsequence of `target`.
///
/// Two-pointer scan: walks `target` once, advancing through `query` whenever
/// the current target character equals the current query character. True iff
/// the query pointer reaches the end. O(|target|) time, O(1) space.
///
/// Matching is exact per character; callers are responsible for normalizing
/// both strings first (see [`normalize_text`](crate::normalize_text)).
///
/// # Examples
///
/// ```
/// use suggestrank::is_subsequence;
///
/// assert!(is_subsequence("mzn", "manzana"));
/// assert!(is_subsequence("leche", "leche"));
/// assert!(!is_subsequence("leche", "lechuga"));
/// assert!(is_subsequence("", "anything"));
/// ```
pub fn is_subsequence(query: &str, target: &str) -> bool {
    let mut query_chars = query.chars();

    let mut next = match query_chars.next() {
        Some(c) => c,
        // Empty query is trivially a subsequence.
        None => return true,
    };

    for c in target.chars() {
        if c == next {
            next = match query_chars.next() {
                Some(c) => c,
                None => return true,
            };
        }
    }

    false
}
