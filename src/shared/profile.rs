//! Profile-Store Wire Types
//!
//! The profile store maps a user id to display attributes. It is read-only
//! from this client's point of view; profile editing happens elsewhere.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display attributes for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// The user this profile belongs to
    pub user_id: Uuid,
    /// Name shown in listings and chat headers
    pub display_name: String,
    /// Avatar image URL, if the user set one
    pub avatar_url: Option<String>,
    /// Campus slug the account is registered under
    pub campus: Option<String>,
}

impl UserProfile {
    /// Fallback label when a profile has not loaded yet
    pub fn placeholder(user_id: Uuid) -> Self {
        Self {
            user_id,
            display_name: "Unknown user".to_string(),
            avatar_url: None,
            campus: None,
        }
    }
}
