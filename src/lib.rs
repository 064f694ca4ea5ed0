#![warn(missing_docs)]

//! Item suggestions from purchase history.
//!
//! `suggestrank` turns a partially typed item name plus an in-memory
//! purchase-history snapshot into an ordered, capped list of decorated
//! suggestions: each candidate is classified by match strength (exact,
//! partial, fuzzy), deduplicated by usage key, ranked, tested for
//! membership in the current list, and annotated with aisle badge colors
//! and per-character highlight runs for rendering.
//!
//! The whole pipeline is a pure, synchronous computation over caller-owned
//! snapshots; persistence, localization tables, and rendering are the
//! caller's collaborators. See [`rank_suggestions`] for the entry point.

/// Case- and accent-insensitive text normalization.
pub mod normalize;

/// Order-preserving character-subsequence matching ("fuzzy" tier).
pub mod subsequence;

/// Caller-supplied input snapshot types (history rows, existing items).
pub mod history;

/// Classification of history entries into exact / partial / fuzzy tiers.
pub mod classify;

/// Aisle-qualified membership testing against the current list.
pub mod membership;

/// Matched/unmatched highlight runs over the original name.
pub mod highlight;

/// Aisle badge color resolution.
pub mod color;

/// Orchestration: sort, dedupe, cap, and decorate into final suggestions.
pub mod rank;

// Re-export primary public API types and functions at the crate root.
pub use classify::{Candidate, MIN_QUERY_CHARS, MatchGroups, MatchTier, classify_history};
pub use color::{
    AisleColorMap, BadgeColors, DEFAULT_AISLE_COLORS, NEUTRAL_BADGE_COLOR, default_aisle_color,
    resolve_badge_colors,
};
pub use highlight::{HighlightSegment, highlight_segments};
pub use history::{AisleRef, ExistingItemRef, UsageHistoryEntry};
pub use membership::CurrentListIndex;
pub use normalize::{normalize_text, strip_diacritics};
pub use rank::{MAX_SUGGESTIONS, Suggestion, rank_suggestions};
pub use subsequence::is_subsequence;
