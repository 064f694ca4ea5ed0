//! Membership testing against the active list's current contents.
//!
//! A suggestion that is already on the list is rendered with an "already in
//! list" indicator instead of an add action. Membership is aisle-qualified:
//! "Setas" in Produce and "Setas" in Frozen are independent facts.

use std::collections::HashSet;

use crate::history::{AisleRef, ExistingItemRef};
use crate::normalize::normalize_text;

/// The membership key for a (name, aisle) pair: both halves normalized,
/// joined with `"::"`. An absent aisle contributes the empty string.
fn membership_key(name: &str, aisle: &str) -> String {
    format!("{}::{}", normalize_text(name), normalize_text(aisle))
}

/// A set of aisle-qualified membership keys built from the active list's
/// existing items. Built fresh for each query evaluation; never retained.
///
/// # Examples
///
/// ```
/// use suggestrank::{AisleRef, CurrentListIndex, ExistingItemRef};
///
/// let items = vec![ExistingItemRef {
///     name: "Setas".to_owned(),
///     aisle: Some(AisleRef::Name("Produce".to_owned())),
/// }];
/// let index = CurrentListIndex::build(&items);
///
/// assert!(index.contains("Setas", Some("Produce")));
/// assert!(!index.contains("Setas", Some("Frozen")));
/// ```
#[derive(Debug)]
pub struct CurrentListIndex {
    keys: HashSet<String>,
}

impl CurrentListIndex {
    /// Build the index from the active list's current items.
    pub fn build(items: &[ExistingItemRef]) -> Self {
        let keys = items
            .iter()
            .map(|item| {
                let aisle = item.aisle.as_ref().map(AisleRef::name).unwrap_or("");
                membership_key(&item.name, aisle)
            })
            .collect();
        Self { keys }
    }

    /// Whether a candidate (name, aisle) pair is already on the list.
    ///
    /// The candidate side derives the same key from its name and English
    /// aisle name; `None` aisle maps to the empty string, matching existing
    /// items that also carry no aisle.
    pub fn contains(&self, name: &str, aisle: Option<&str>) -> bool {
        self.keys
            .contains(&membership_key(name, aisle.unwrap_or("")))
    }
}
