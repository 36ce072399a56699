use shared::models::User;
use yewdux::Store;

/// Process-wide session state, injected into views through yewdux.
///
/// Lifecycle: `loading` until the persisted token (if any) is resolved
/// against `GET /me`, then either authenticated (`user` set) or anonymous
/// (`user` empty). Transitions back only on explicit login/logout.
#[derive(Clone, PartialEq, Store)]
pub struct SessionState {
    /// Whether session resolution is still in flight.
    pub loading: bool,
    /// The authenticated user; empty while anonymous.
    pub user: Option<User>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            loading: true,
            user: None,
        }
    }
}

impl SessionState {
    /// State after a successful login, register, or token resolution.
    pub fn authenticated(user: User) -> Self {
        Self {
            loading: false,
            user: Some(user),
        }
    }

    /// State with no usable token: logged out, or resolution failed closed.
    pub fn anonymous() -> Self {
        Self {
            loading: false,
            user: None,
        }
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user may use the moderation console.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::Timestamp;
    use uuid::Uuid;

    fn user(is_admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: None,
            city: "Bhopal".to_string(),
            is_admin,
            created_at: Timestamp(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_authenticated_state() {
        let state = SessionState::authenticated(user(false));
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_admin_flag_gates_console() {
        assert!(SessionState::authenticated(user(true)).is_admin());
    }

    #[test]
    fn test_anonymous_state() {
        let state = SessionState::anonymous();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }
}
