//! Persistence of the session token across page loads.
//!
//! A single opaque bearer token lives in browser-local storage under the
//! `token` key; the user profile is never persisted and is re-resolved from
//! `GET /me` on every load.

use gloo_storage::{LocalStorage, Storage};

const TOKEN_STORAGE_KEY: &str = "token";

/// Token left behind by a previous session, if any.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_STORAGE_KEY).ok()
}

/// Persist the token so the session survives a reload.
pub fn persist_token(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_STORAGE_KEY, token) {
        log::error!("failed to persist session token: {err}");
    }
}

/// Drop the persisted token; safe to call when none is stored.
pub fn clear_token() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
}
