//! Durable session store: the client-held token and cached user profile.
//!
//! The two entries are always written and removed together; a token without
//! a user (or the reverse) only occurs transiently inside `save`/`clear`.
//! Token freshness is never checked client-side — the server re-validates
//! the bearer credential on every request.
//!
//! The store is a trait so the HTTP layer and auth state can be exercised
//! against [`MemorySession`] in tests; the browser build injects
//! [`BrowserSession`] backed by `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::net::types::User;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// localStorage key holding the serialized user profile.
pub const USER_KEY: &str = "user_data";

/// Client-side cache of the authenticated identity.
pub trait SessionStore {
    /// Persist both halves of the session. Callers never store one
    /// without the other.
    fn save(&self, token: &str, user: &User);

    /// The cached bearer token, if a session exists.
    fn token(&self) -> Option<String>;

    /// The cached user profile. Malformed stored data reads as `None`
    /// rather than an error.
    fn user(&self) -> Option<User>;

    /// Remove both session entries.
    fn clear(&self);

    /// Whether a token is currently cached.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Session store backed by the browser's `localStorage`.
///
/// Outside the browser every read returns `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(feature = "hydrate")]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSession {
    fn save(&self, token: &str, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                if let Ok(json) = serde_json::to_string(user) {
                    let _ = storage.set_item(USER_KEY, &json);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user);
        }
    }

    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn user(&self) -> Option<User> {
        #[cfg(feature = "hydrate")]
        {
            let json = Self::storage()?.get_item(USER_KEY).ok().flatten()?;
            serde_json::from_str(&json).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

/// In-process session store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
    user: RefCell<Option<User>>,
}

impl SessionStore for MemorySession {
    fn save(&self, token: &str, user: &User) {
        *self.token.borrow_mut() = Some(token.to_owned());
        *self.user.borrow_mut() = Some(user.clone());
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
    }
}
