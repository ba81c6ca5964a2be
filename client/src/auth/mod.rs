//! Authentication state
//!
//! [`AuthStore`] is a reactive cell tracking who is currently authenticated,
//! synchronized with the server through the API client. Two logical states:
//! `Some(user)` (authenticated) and `None` (unauthenticated), starting at
//! `None`.
//!
//! State lives in explicit constructed handles, never module-level globals,
//! so tests can build isolated instances.

pub mod observable;

pub use observable::{Observable, Subscription};

use crate::api::ApiClient;
use crate::error::ClientResult;
use std::sync::Arc;
use tracing::{info, warn};
use training_diary_shared::types::UserResponse;

/// Observable holder for the current authenticated user
pub struct AuthStore {
    api: Arc<ApiClient>,
    current: Observable<Option<UserResponse>>,
}

impl AuthStore {
    /// Create a store starting unauthenticated
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            current: Observable::new(None),
        }
    }

    /// Read the current user without subscribing
    pub fn current_user(&self) -> Option<UserResponse> {
        self.current.get()
    }

    /// Observe the current user; the observer fires immediately with the
    /// present value and again on every transition
    pub fn subscribe(
        &self,
        observer: impl FnMut(&Option<UserResponse>) + Send + 'static,
    ) -> Subscription<Option<UserResponse>> {
        self.current.subscribe(observer)
    }

    /// Log in and fetch the resulting user
    ///
    /// On failure of either call the error propagates and the held value is
    /// left untouched: a failed attempt must not clobber a possibly
    /// still-valid prior session.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserResponse> {
        self.api.login(username, password).await?;
        let user = self.api.get_current_user().await?;
        self.current.set(Some(user.clone()));
        info!(user_id = user.id, "authenticated");
        Ok(user)
    }

    /// Clear the bearer token and transition to unauthenticated
    ///
    /// No server call is made; the session is not invalidated server-side.
    pub fn logout(&self) {
        self.api.set_token("");
        self.current.set(None);
        info!("logged out");
    }

    /// Probe the server for a live session using whatever token is held
    ///
    /// Never fails: any error (missing token, expired token, network) is
    /// downgraded to "no user" and the store transitions to
    /// unauthenticated. Used for passive session-presence checks where
    /// "not logged in" and "error" are treated identically.
    pub async fn check_auth(&self) -> Option<UserResponse> {
        match self.api.get_current_user().await {
            Ok(user) => {
                self.current.set(Some(user.clone()));
                Some(user)
            }
            Err(err) => {
                warn!(error = %err, "auth check failed, treating as unauthenticated");
                self.current.set(None);
                None
            }
        }
    }
}
