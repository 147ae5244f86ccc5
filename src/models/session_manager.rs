use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::user_session::UserSession;

/// Shared store of per-session state, keyed by the session id carried in the
/// browser cookie. Each handler reads its session out, works on it, and
/// writes it back, so state is never ambient.
#[derive(Clone, Default)]
pub struct GlobalSessionManager {
    sessions: Arc<Mutex<HashMap<String, UserSession>>>,
}

impl GlobalSessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates a session.
    pub fn insert(&self, session_id: String, session: UserSession) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session_id, session);
    }

    /// Retrieves a session if it exists.
    pub fn get(&self, session_id: &str) -> Option<UserSession> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(session_id).cloned()
    }

    /// Retrieves a session, creating an empty one on first access.
    pub fn get_or_init(&self, session_id: &str) -> UserSession {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.entry(session_id.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;
    use crate::models::user::User;

    #[test]
    fn get_or_init_creates_empty_session() {
        let manager = GlobalSessionManager::new();
        assert!(manager.get("s1").is_none());
        let session = manager.get_or_init("s1");
        assert!(session.history.is_empty());
        assert!(manager.get("s1").is_some());
    }

    #[test]
    fn sessions_are_isolated_by_id() {
        let manager = GlobalSessionManager::new();

        let mut first = manager.get_or_init("s1");
        first.login(User {
            id: 1,
            email: "a@example.com".to_string(),
        });
        first.push_turn(Role::User, "hello");
        manager.insert("s1".to_string(), first);

        let second = manager.get_or_init("s2");
        assert!(!second.auth.is_authenticated());
        assert!(second.history.is_empty());

        let first_again = manager.get("s1").unwrap();
        assert_eq!(first_again.history.len(), 1);
    }
}
