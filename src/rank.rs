//! Suggestion ranking: classify, sort, deduplicate, cap, decorate.
//!
//! [`rank_suggestions`] is the crate's top-level operation. It is a pure
//! function of its inputs: every keystroke recomputes the full result from
//! the supplied history and existing-items snapshots, and nothing is cached
//! between calls.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::classify::{Candidate, MatchTier, classify_history};
use crate::color::{AisleColorMap, BadgeColors, resolve_badge_colors};
use crate::highlight::{HighlightSegment, highlight_segments};
use crate::history::{ExistingItemRef, UsageHistoryEntry};
use crate::membership::CurrentListIndex;

/// Maximum number of suggestions returned per query.
pub const MAX_SUGGESTIONS: usize = 20;

/// A fully decorated suggestion, ready for rendering.
///
/// Constructed fresh per query evaluation and never retained by this crate.
/// Within one returned sequence, `usage_key` values are unique and tiers are
/// ordered exact, then partial, then fuzzy.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The item's original (possibly accented) display name.
    pub item_name: String,
    /// How strongly the name matched the query.
    pub tier: MatchTier,
    /// Deduplication identity of the underlying history entry.
    pub usage_key: String,
    /// Whether this (name, aisle) pair is already on the active list.
    pub in_current_list: bool,
    /// Localized aisle name for display, or `None` when the entry has no aisle.
    pub display_aisle: Option<String>,
    /// English (canonical) aisle name, or `None` when the entry has no aisle.
    pub english_aisle: Option<String>,
    /// Resolved badge colors for the aisle.
    pub badge: BadgeColors,
    /// Matched/unmatched runs whose concatenation reproduces `item_name`.
    pub segments: Vec<HighlightSegment>,
}

/// Comparator within a tier: purchase count descending, then original name
/// ascending. A deliberate ranking policy, stable across the three tiers.
fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.entry
        .purchase_count
        .cmp(&a.entry.purchase_count)
        .then_with(|| a.entry.item_name.cmp(&b.entry.item_name))
}

/// Rank purchase history against a query and return decorated suggestions.
///
/// Pipeline:
/// 1. Classify every history entry into exact / partial / fuzzy groups
///    (empty result when the normalized query is shorter than
///    [`MIN_QUERY_CHARS`](crate::MIN_QUERY_CHARS)).
/// 2. Sort each group by purchase count descending, name ascending.
/// 3. Walk groups in tier order, emitting each entry's first occurrence by
///    `usage_key` until [`MAX_SUGGESTIONS`] entries are collected; the
///    stronger tier wins when near-duplicate history rows classify at
///    different tiers.
/// 4. Decorate each survivor: list membership (aisle-qualified), localized
///    aisle via the injected `translator`, badge colors, highlight runs.
///
/// # Arguments
///
/// * `query` - Raw text from the input field (any string)
/// * `history` - Purchase-history snapshot
/// * `existing_items` - The active list's current contents
/// * `color_map` - Aisle display name to hex color, from the caller's UI
/// * `translator` - Injected i18n function mapping an English aisle name to
///   its localized display name
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use suggestrank::{MatchTier, UsageHistoryEntry, rank_suggestions};
///
/// let history = vec![UsageHistoryEntry {
///     item_name: "Milk".to_owned(),
///     purchase_count: 10,
///     last_aisle: Some("Dairy".to_owned()),
///     usage_key: None,
/// }];
///
/// let suggestions =
///     rank_suggestions("mil", &history, &[], &HashMap::new(), &|aisle| aisle.to_owned());
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].tier, MatchTier::Partial);
/// assert_eq!(suggestions[0].display_aisle.as_deref(), Some("Dairy"));
/// ```
pub fn rank_suggestions(
    query: &str,
    history: &[UsageHistoryEntry],
    existing_items: &[ExistingItemRef],
    color_map: &AisleColorMap,
    translator: &dyn Fn(&str) -> String,
) -> Vec<Suggestion> {
    let mut groups = classify_history(query, history);
    if groups.is_empty() {
        return Vec::new();
    }

    groups.exact.sort_by(compare_candidates);
    groups.partial.sort_by(compare_candidates);
    groups.fuzzy.sort_by(compare_candidates);

    let index = CurrentListIndex::build(existing_items);

    // Fresh per call: first occurrence of a usage key wins, stronger tiers
    // are walked first, and emission stops at the cap.
    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions = Vec::new();

    let tiers = [
        (MatchTier::Exact, &groups.exact),
        (MatchTier::Partial, &groups.partial),
        (MatchTier::Fuzzy, &groups.fuzzy),
    ];

    'emit: for (tier, group) in tiers {
        for candidate in group.iter() {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break 'emit;
            }
            let usage_key = candidate.entry.usage_key();
            if !seen.insert(usage_key.clone()) {
                continue;
            }
            suggestions.push(decorate(candidate, tier, usage_key, query, &index, color_map, translator));
        }
    }

    suggestions
}

/// Build the final [`Suggestion`] for one surviving candidate.
fn decorate(
    candidate: &Candidate<'_>,
    tier: MatchTier,
    usage_key: String,
    query: &str,
    index: &CurrentListIndex,
    color_map: &AisleColorMap,
    translator: &dyn Fn(&str) -> String,
) -> Suggestion {
    let entry = candidate.entry;
    let english_aisle = entry.last_aisle.clone();
    let display_aisle = english_aisle.as_deref().map(translator);

    Suggestion {
        in_current_list: index.contains(&entry.item_name, english_aisle.as_deref()),
        badge: resolve_badge_colors(display_aisle.as_deref(), color_map, english_aisle.as_deref()),
        segments: highlight_segments(&entry.item_name, query, tier),
        item_name: entry.item_name.clone(),
        tier,
        usage_key,
        display_aisle,
        english_aisle,
    }
}
