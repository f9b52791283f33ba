//! Favorite Bookkeeping
//!
//! Tracks which listings the signed-in user has bookmarked. The store's
//! favorites collection is the source of truth; this set mirrors the last
//! fetch and is updated only after a toggle write succeeds.

use std::collections::HashSet;

use uuid::Uuid;

use crate::shared::listing::{Favorite, Listing};

/// The signed-in user's favorite listing ids
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    ids: HashSet<Uuid>,
}

impl FavoriteSet {
    /// Build from freshly fetched favorite rows
    pub fn from_rows(rows: &[Favorite]) -> Self {
        Self {
            ids: rows.iter().map(|f| f.listing_id).collect(),
        }
    }

    pub fn contains(&self, listing_id: Uuid) -> bool {
        self.ids.contains(&listing_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Record a confirmed favorite write
    pub fn insert(&mut self, listing_id: Uuid) {
        self.ids.insert(listing_id);
    }

    /// Record a confirmed un-favorite write
    pub fn remove(&mut self, listing_id: Uuid) {
        self.ids.remove(&listing_id);
    }

    /// Filter fetched listings down to the favorited ones, newest first
    pub fn favorite_listings<'a>(&self, all: &'a [Listing]) -> Vec<&'a Listing> {
        let mut matched: Vec<&Listing> =
            all.iter().filter(|l| self.ids.contains(&l.id)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}
