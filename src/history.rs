//! Input snapshot types supplied by the caller on every query.
//!
//! [`UsageHistoryEntry`] is one row of purchase history; [`ExistingItemRef`]
//! describes an item already present in the active list. Both are immutable
//! snapshots owned by the caller; this crate never mutates or retains them.

use crate::normalize::normalize_text;

/// One row of purchase history for a single (item, aisle) pair.
///
/// The persistence layer historically exposed the aisle under two different
/// field names (`last_aisle` / `usage_aisle`); this type has exactly one
/// canonical field, `last_aisle`. Callers still carrying the other name map
/// it at their own boundary.
///
/// # Examples
///
/// ```
/// use suggestrank::UsageHistoryEntry;
///
/// let entry = UsageHistoryEntry {
///     item_name: "Milk".to_owned(),
///     purchase_count: 10,
///     last_aisle: Some("Dairy".to_owned()),
///     usage_key: None,
/// };
/// assert_eq!(entry.usage_key(), "milk::dairy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageHistoryEntry {
    /// Display name of the item, possibly accented ("Caf\u{00E9}").
    pub item_name: String,
    /// How many times this (item, aisle) pair has been purchased.
    pub purchase_count: u32,
    /// English name of the aisle this item was last filed under, if known.
    pub last_aisle: Option<String>,
    /// Explicit deduplication key assigned by the persistence layer, if any.
    /// When absent, a key is derived from the normalized name and aisle.
    pub usage_key: Option<String>,
}

impl UsageHistoryEntry {
    /// The deduplication identity of this entry.
    ///
    /// Uses the explicit `usage_key` when present; otherwise derives
    /// `normalized_name + "::" + normalized_aisle` (empty aisle when absent).
    /// Two raw history rows for the same real-world item produce the same
    /// key and collapse to one suggestion.
    pub fn usage_key(&self) -> String {
        if let Some(key) = &self.usage_key {
            return key.clone();
        }
        let aisle = self.last_aisle.as_deref().unwrap_or("");
        format!(
            "{}::{}",
            normalize_text(&self.item_name),
            normalize_text(aisle)
        )
    }
}

/// The aisle field of an existing list item, which arrives in one of two
/// shapes from the caller: a bare name string, or a record with a `name`
/// field. Resolved once at the boundary via [`AisleRef::name`] instead of
/// branching throughout the algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AisleRef {
    /// The aisle given directly as its name.
    Name(String),
    /// The aisle given as a record carrying its name.
    Record {
        /// The aisle's name.
        name: String,
    },
}

impl AisleRef {
    /// The aisle name, whichever shape it arrived in.
    pub fn name(&self) -> &str {
        match self {
            AisleRef::Name(name) => name,
            AisleRef::Record { name } => name,
        }
    }
}

/// An item already present in the active list, used only for membership
/// testing (see [`CurrentListIndex`](crate::CurrentListIndex)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingItemRef {
    /// Display name of the item.
    pub name: String,
    /// The aisle the item is filed under, if any.
    pub aisle: Option<AisleRef>,
}
