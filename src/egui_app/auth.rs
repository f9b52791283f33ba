//! Authentication
//!
//! Sign-in/sign-up form state and the worker-thread calls behind it. The
//! vendor's identity provider issues a `Session` (user id + token); the
//! token lives inside the store client, the session travels explicitly into
//! every messaging call.

use crate::store::{HostedStore, Session};

/// Which form the auth view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Authentication state
#[derive(Debug, Clone)]
pub struct AuthState {
    pub session: Option<Session>,
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            mode: AuthMode::SignIn,
            email: String::new(),
            password: String::new(),
            display_name: String::new(),
            error: None,
            loading: false,
        }
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed-in user id, if any
    pub fn current_user(&self) -> Option<uuid::Uuid> {
        self.session.as_ref().map(|s| s.user_id)
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop the session and clear the form
    pub fn sign_out(&mut self, store: &HostedStore) {
        store.logout();
        *self = Self::default();
    }
}

/// Sign in against the identity provider (blocking; run on a worker thread)
pub fn login(store: &HostedStore, email: &str, password: &str) -> Result<Session, String> {
    store
        .login(email, password)
        .map_err(|e| format!("Sign-in failed: {}", e))
}

/// Create an account and sign in (blocking; run on a worker thread)
pub fn signup(
    store: &HostedStore,
    email: &str,
    display_name: &str,
    password: &str,
) -> Result<Session, String> {
    store
        .signup(email, display_name, password)
        .map_err(|e| format!("Sign-up failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AuthState::new();
        assert!(state.session.is_none());
        assert!(state.current_user().is_none());
        assert_eq!(state.mode, AuthMode::SignIn);
    }

    #[test]
    fn test_error_handling() {
        let mut state = AuthState::new();
        state.set_error("bad password".to_string());
        assert_eq!(state.error.as_deref(), Some("bad password"));
        state.clear_error();
        assert!(state.error.is_none());
    }
}
