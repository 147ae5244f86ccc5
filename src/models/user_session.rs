use crate::models::chat::{ChatTurn, Role};
use crate::models::user::User;

/// The two auth states a session can be in. Transitions consume the current
/// state and return the next one, so rendering code never flips state ad hoc.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl AuthState {
    /// anonymous -> authenticated. A repeated login replaces the stored user
    /// wholesale.
    pub fn login(self, user: User) -> AuthState {
        AuthState::Authenticated(user)
    }

    /// Any state -> anonymous.
    pub fn logout(self) -> AuthState {
        AuthState::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Anonymous => None,
        }
    }
}

/// Per-browser-session state: the auth state machine and the ordered chat
/// history. Invariant: history is non-empty only while authenticated, because
/// chat is gated on login and logout clears everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub auth: AuthState,
    pub history: Vec<ChatTurn>,
}

impl UserSession {
    pub fn login(&mut self, user: User) {
        self.auth = std::mem::take(&mut self.auth).login(user);
    }

    /// Clears user and full chat history unconditionally.
    pub fn logout(&mut self) {
        self.auth = std::mem::take(&mut self.auth).logout();
        self.history.clear();
    }

    pub fn push_turn(&mut self, role: Role, text: impl Into<String>) {
        self.history.push(ChatTurn::new(role, text));
    }
}
