//! Match-tier classification of history entries against a query.
//!
//! Every history entry is placed in exactly one of three tiers, checked in
//! descending order of strength: exact normalized equality, contiguous
//! substring containment, or order-preserving subsequence. Entries matching
//! none of the three are excluded entirely.

use memchr::memmem;

use crate::history::UsageHistoryEntry;
use crate::normalize::normalize_text;
use crate::subsequence::is_subsequence;

/// Minimum normalized query length (in characters) for classification.
///
/// Queries shorter than this produce no candidates at all; one- and
/// two-character queries match too much of any realistic history to be
/// useful.
pub const MIN_QUERY_CHARS: usize = 3;

/// How strongly a history entry's name matches the query.
///
/// Ordered from strongest to weakest: [`Exact`](MatchTier::Exact) >
/// [`Partial`](MatchTier::Partial) > [`Fuzzy`](MatchTier::Fuzzy). The
/// derived `Ord` follows declaration order, so `Exact` compares as the
/// smallest value; ranking walks tiers in declaration order rather than
/// comparing them numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Normalized name equals the normalized query.
    Exact,
    /// Normalized name contains the normalized query as a contiguous substring.
    Partial,
    /// Every query character appears in the name in order, non-contiguously.
    Fuzzy,
}

/// A history entry that survived classification, paired with its cached
/// normalized name so later stages don't re-normalize.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The underlying history entry.
    pub entry: &'a UsageHistoryEntry,
    /// `normalize_text` of the entry's name, computed once.
    pub normalized_name: String,
}

/// The three per-tier candidate groups produced by [`classify_history`],
/// each in original history order (sorting happens later, in ranking).
#[derive(Debug, Default)]
pub struct MatchGroups<'a> {
    /// Entries whose normalized name equals the normalized query.
    pub exact: Vec<Candidate<'a>>,
    /// Entries whose normalized name contains the query as a substring.
    pub partial: Vec<Candidate<'a>>,
    /// Entries matched only as a character subsequence.
    pub fuzzy: Vec<Candidate<'a>>,
}

impl<'a> MatchGroups<'a> {
    /// True when no entry matched at any tier.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty() && self.fuzzy.is_empty()
    }
}

/// Classify every history entry against `raw_query` into the three tiers.
///
/// The query is normalized first; when its normalized form is shorter than
/// [`MIN_QUERY_CHARS`], all groups come back empty regardless of history
/// contents. Entries whose names normalize to the empty string are skipped.
/// The substring test uses a [`memmem::Finder`] built once for the query.
///
/// # Examples
///
/// ```
/// use suggestrank::{UsageHistoryEntry, classify_history};
///
/// let history = vec![UsageHistoryEntry {
///     item_name: "Leche".to_owned(),
///     purchase_count: 3,
///     last_aisle: None,
///     usage_key: None,
/// }];
///
/// let groups = classify_history("leche", &history);
/// assert_eq!(groups.exact.len(), 1);
/// assert!(groups.partial.is_empty());
///
/// // Too-short queries classify nothing.
/// assert!(classify_history("le", &history).is_empty());
/// ```
pub fn classify_history<'a>(
    raw_query: &str,
    history: &'a [UsageHistoryEntry],
) -> MatchGroups<'a> {
    let query = normalize_text(raw_query);
    if query.chars().count() < MIN_QUERY_CHARS {
        return MatchGroups::default();
    }

    let finder = memmem::Finder::new(query.as_bytes());
    let mut groups = MatchGroups::default();

    for entry in history {
        let normalized_name = normalize_text(&entry.item_name);
        if normalized_name.is_empty() {
            continue;
        }

        let candidate = Candidate {
            entry,
            normalized_name,
        };

        if candidate.normalized_name == query {
            groups.exact.push(candidate);
        } else if finder.find(candidate.normalized_name.as_bytes()).is_some() {
            groups.partial.push(candidate);
        } else if is_subsequence(&query, &candidate.normalized_name) {
            groups.fuzzy.push(candidate);
        }
        // No tier matched: the entry surfaces nowhere.
    }

    groups
}
