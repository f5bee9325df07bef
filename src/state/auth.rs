//! Process-wide authentication state.
//!
//! Provided as an `RwSignal<AuthState>` context at the application root and
//! read by every view. The state starts `Initializing` and resolves from
//! the cached session once at startup; views must not act on authentication
//! until the phase resolves, or a reload would flash-redirect to the login
//! view before the cached session is read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update, expect_context, provide_context};

use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::session::SessionStore;

/// Where the session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// The cached session has not been read yet; authentication is not
    /// decidable.
    #[default]
    Initializing,
    Authenticated,
    Anonymous,
}

/// Current user and session phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
}

impl AuthState {
    /// Resolve the startup phase from a cached session. Authenticated only
    /// when both halves are present; a token without a user (or the
    /// reverse) counts as no session.
    pub fn resolve(&mut self, token: Option<&str>, user: Option<User>) {
        if token.is_some() {
            if let Some(user) = user {
                self.phase = AuthPhase::Authenticated;
                self.user = Some(user);
                return;
            }
        }
        self.phase = AuthPhase::Anonymous;
        self.user = None;
    }

    pub fn login_succeeded(&mut self, user: User) {
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
    }

    pub fn logged_out(&mut self) {
        self.phase = AuthPhase::Anonymous;
        self.user = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// False only while `Initializing`.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.phase != AuthPhase::Initializing
    }
}

/// Create the shared auth signal and register it as a context for child
/// views. Call once at the application root.
pub fn provide_auth_state() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    auth
}

/// The shared auth signal, from any view below the root.
///
/// # Panics
///
/// Panics if [`provide_auth_state`] was not called by an ancestor.
#[must_use]
pub fn use_auth_state() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Resolve the startup phase from the cached session. Call once after the
/// signal is provided.
pub fn init_auth(auth: RwSignal<AuthState>, session: &dyn SessionStore) {
    let token = session.token();
    let user = session.user();
    auth.update(|state| state.resolve(token.as_deref(), user));
}

/// Attempt a login. On success the session store and the shared state both
/// hold the new identity; on failure the state is left `Anonymous` and the
/// normalized error is returned for display.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the login request.
pub async fn login(
    auth: RwSignal<AuthState>,
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    match auth::login(client, email, password).await {
        Ok(response) => {
            auth.update(|state| state.login_succeeded(response.user));
            Ok(())
        }
        Err(err) => {
            auth.update(AuthState::logged_out);
            Err(err)
        }
    }
}

/// Clear the session store and move the shared state to `Anonymous`.
pub fn logout(auth: RwSignal<AuthState>, client: &ApiClient) {
    auth::logout(client);
    auth.update(AuthState::logged_out);
}
