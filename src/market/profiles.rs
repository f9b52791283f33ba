//! Profile Directory
//!
//! Read-only cache over the profile store. Views ask for a display name by
//! user id; misses are queued so the app can fetch them on a worker thread
//! and insert the result. Profiles are never written from this client.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::shared::profile::UserProfile;

/// Cache of fetched profiles plus the set of ids still waiting on a fetch
#[derive(Debug, Default)]
pub struct ProfileDirectory {
    profiles: HashMap<Uuid, UserProfile>,
    pending: HashSet<Uuid>,
}

impl ProfileDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for UI labels, falling back to a placeholder
    pub fn display_name(&self, user_id: Uuid) -> String {
        self.profiles
            .get(&user_id)
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| UserProfile::placeholder(user_id).display_name)
    }

    /// Mark a miss for fetching. Returns true if the id was not already
    /// cached or queued, i.e. the caller should start a fetch.
    pub fn request(&mut self, user_id: Uuid) -> bool {
        if self.profiles.contains_key(&user_id) {
            return false;
        }
        self.pending.insert(user_id)
    }

    /// Store a fetch result; a `None` (no profile row) clears the pending
    /// mark so the miss is not re-fetched every frame
    pub fn resolve(&mut self, user_id: Uuid, profile: Option<UserProfile>) {
        self.pending.remove(&user_id);
        if let Some(profile) = profile {
            self.profiles.insert(user_id, profile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(user_id: Uuid, name: &str) -> UserProfile {
        UserProfile {
            user_id,
            display_name: name.to_string(),
            avatar_url: None,
            campus: None,
        }
    }

    #[test]
    fn test_request_marks_once() {
        let mut dir = ProfileDirectory::new();
        let id = Uuid::new_v4();
        assert!(dir.request(id));
        assert!(!dir.request(id));
    }

    #[test]
    fn test_resolve_caches_and_clears_pending() {
        let mut dir = ProfileDirectory::new();
        let id = Uuid::new_v4();
        dir.request(id);
        dir.resolve(id, Some(profile(id, "Sam")));
        assert_eq!(dir.display_name(id), "Sam");
        assert!(!dir.request(id));
    }

    #[test]
    fn test_missing_profile_gets_placeholder_name() {
        let dir = ProfileDirectory::new();
        assert_eq!(dir.display_name(Uuid::new_v4()), "Unknown user");
    }

    #[test]
    fn test_resolve_none_stops_refetch() {
        let mut dir = ProfileDirectory::new();
        let id = Uuid::new_v4();
        dir.request(id);
        dir.resolve(id, None);
        // Still no profile, but the miss was answered; a later request may
        // try the fetch again
        assert_eq!(dir.display_name(id), "Unknown user");
        assert!(dir.request(id));
    }
}
