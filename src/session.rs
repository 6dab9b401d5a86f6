//! Auth/Session Store
//!
//! Bearer token in session storage plus cached current-user info,
//! provided app-wide via Leptos context.

use leptos::prelude::*;

use crate::api;
use crate::models::CurrentUser;
use crate::routes::{self, Route};

/// Session-scoped storage key for the bearer token.
pub const TOKEN_KEY: &str = "jwt";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Token as persisted, if any. Read straight from storage so every
/// outgoing request sees the latest value, including right after a
/// reload.
pub fn stored_token() -> Option<String> {
    let token = storage()?.get_item(TOKEN_KEY).ok().flatten()?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// A non-null, non-empty token counts as logged in.
pub fn token_grants_login(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// App-wide session signals
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<CurrentUser>>,
}

impl Session {
    pub fn load() -> Self {
        Self {
            token: RwSignal::new(stored_token()),
            user: RwSignal::new(None),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.with(|t| token_grants_login(t.as_deref()))
    }

    pub fn user(&self) -> ReadSignal<Option<CurrentUser>> {
        self.user.read_only()
    }

    pub fn username(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.username.clone()))
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(|u| u.admin))
    }

    pub fn can_author_faqs(&self) -> bool {
        self.user
            .with(|u| u.as_ref().is_some_and(|u| u.faq_author || u.admin))
    }

    /// Storage first, signal second: a reload between the two cannot
    /// lose the token.
    pub fn set_token(&self, token: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        self.token.set(Some(token.to_string()));
    }

    pub fn set_user(&self, user: CurrentUser) {
        self.user.set(Some(user));
    }

    /// Cached current user, fetched once when a token is present.
    pub async fn ensure_user(&self) -> Option<CurrentUser> {
        if let Some(user) = self.user.get_untracked() {
            return Some(user);
        }
        stored_token()?;
        match api::user::current().await {
            Ok(user) => {
                self.user.set(Some(user.clone()));
                Some(user)
            }
            Err(err) => {
                log::warn!("current-user fetch failed: {err}");
                None
            }
        }
    }

    pub fn logout(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.token.set(None);
        self.user.set(None);
        routes::navigate(&Route::Home);
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_tokens_do_not_grant_login() {
        assert!(!token_grants_login(None));
        assert!(!token_grants_login(Some("")));
        assert!(token_grants_login(Some("eyJhbGciOi")));
    }
}
