//! Authentication State
//!
//! Session guard backed by browser local storage. A token/user pair in
//! storage counts as logged in; missing or malformed data wipes storage
//! and treats the user as logged out.

use leptos::*;

/// Local storage key for the raw API token
pub const TOKEN_KEY: &str = "token";
/// Local storage key for the JSON-encoded user
pub const USER_KEY: &str = "user";

/// The signed-in user as returned by the auth endpoints
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub rank: u32,
}

/// Token/user pair for an active session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// Auth state provided to all components
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: RwSignal<Option<Session>>,
}

/// Provide auth state to the component tree, restoring any stored session
pub fn provide_auth_state() {
    let state = AuthState {
        session: create_rw_signal(load_session()),
    };

    provide_context(state);
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Persist the session and mark the user as logged in
    pub fn login(&self, token: String, user: AuthUser) {
        store_session(&token, &user);
        self.session.set(Some(Session { token, user }));
    }

    /// Clear storage and drop the in-memory session. The session is dropped
    /// even if storage access fails.
    pub fn logout(&self) {
        clear_session();
        self.session.set(None);
    }
}

/// Build a session from raw storage values. `None` on any missing or
/// malformed piece.
pub fn parse_session(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    if token.is_empty() {
        return None;
    }
    let user: AuthUser = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Restore a session from local storage. Invalid stored state is wiped so
/// the next bootstrap starts clean.
pub fn load_session() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user_json = storage.get_item(USER_KEY).ok().flatten();

    match parse_session(token, user_json) {
        Some(session) => Some(session),
        None => {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
            None
        }
    }
}

fn store_session(token: &str, user: &AuthUser) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> String {
        r#"{"id":"1","name":"Alex Chen","email":"alex.chen@university.edu","level":12,"total_points":2847,"rank":3}"#
            .to_string()
    }

    #[test]
    fn test_parse_session_valid() {
        let session = parse_session(Some("tok-123".to_string()), Some(user_json()))
            .expect("valid pair restores a session");
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.name, "Alex Chen");
        assert_eq!(session.user.total_points, 2847);
    }

    #[test]
    fn test_parse_session_missing_pieces() {
        assert!(parse_session(None, Some(user_json())).is_none());
        assert!(parse_session(Some("tok".to_string()), None).is_none());
        assert!(parse_session(Some(String::new()), Some(user_json())).is_none());
    }

    #[test]
    fn test_parse_session_malformed_user() {
        assert!(parse_session(Some("tok".to_string()), Some("{not json".to_string())).is_none());
        assert!(parse_session(Some("tok".to_string()), Some("42".to_string())).is_none());
    }

    #[test]
    fn test_parse_session_defaults_optional_fields() {
        let minimal = r#"{"id":"7","name":"Sam"}"#.to_string();
        let session = parse_session(Some("tok".to_string()), Some(minimal)).unwrap();
        assert_eq!(session.user.level, 0);
        assert_eq!(session.user.rank, 0);
        assert!(session.user.avatar.is_none());
    }
}
