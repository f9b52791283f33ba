//! Conversation Data Structure
//!
//! A conversation is one persistent thread per unordered pair of users. The
//! store keeps the pair in two directional columns, so identity checks here
//! must accept either assignment of the same two users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct-message thread between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    /// Unique conversation ID, assigned by the store
    pub id: Uuid,
    /// First participant column in the store's schema
    pub participant_a: Uuid,
    /// Second participant column in the store's schema
    pub participant_b: Uuid,
    /// Listing that triggered first contact; informational, not identity
    pub origin_listing_id: Option<Uuid>,
    /// When the thread was created, assigned by the store
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Check if a user is one of the two participants
    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.participant_a == user_id || self.participant_b == user_id
    }

    /// The other participant relative to `current_user_id`, if the user is in
    /// the thread at all
    pub fn other_participant(&self, current_user_id: Uuid) -> Option<Uuid> {
        if self.participant_a == current_user_id {
            Some(self.participant_b)
        } else if self.participant_b == current_user_id {
            Some(self.participant_a)
        } else {
            None
        }
    }

    /// Whether this thread is between `x` and `y`, under either directional
    /// assignment of the columns
    pub fn is_between(&self, x: Uuid, y: Uuid) -> bool {
        (self.participant_a == x && self.participant_b == y)
            || (self.participant_a == y && self.participant_b == x)
    }
}

/// Payload for creating a conversation; id and timestamp are store-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDraft {
    pub participant_a: Uuid,
    pub participant_b: Uuid,
    pub origin_listing_id: Option<Uuid>,
}

/// Response for listing conversations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConversationsResponse {
    pub conversations: Vec<Conversation>,
}

/// Canonical ordering for an unordered user pair
pub mod pair {
    use uuid::Uuid;

    /// Sort a pair of user ids into canonical (low, high) order.
    ///
    /// New conversations are written in this order so equal pairs produce
    /// byte-identical rows; reads must still match both directions because
    /// rows written by older clients can be in either order.
    pub fn canonical(x: Uuid, y: Uuid) -> (Uuid, Uuid) {
        if x <= y {
            (x, y)
        } else {
            (y, x)
        }
    }
}
