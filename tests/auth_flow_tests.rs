mod common;

use serde_json::json;

use helpdesk_chat::models::chat::Role;
use helpdesk_chat::models::user::User;
use helpdesk_chat::models::user_session::{AuthState, UserSession};
use helpdesk_chat::services::auth_service::{self, AuthError};
use helpdesk_chat::services::backend_client::BackendError;

use common::ScriptedBackend;

#[tokio::test]
async fn login_transitions_anonymous_to_authenticated_with_verbatim_user() {
    let backend = ScriptedBackend::new(vec![Ok(json!({
        "message": "Login successful",
        "user": {"id": 1, "email": "a@example.com"}
    }))]);
    let mut session = UserSession::default();

    let user = auth_service::login(&backend, "a@example.com", "pw")
        .await
        .unwrap();
    session.login(user);

    assert_eq!(
        session.auth,
        AuthState::Authenticated(User {
            id: 1,
            email: "a@example.com".to_string(),
        })
    );
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/auth/login");
    assert_eq!(
        calls[0].1,
        json!({"email": "a@example.com", "password": "pw"})
    );
}

#[tokio::test]
async fn rejected_login_leaves_session_anonymous() {
    let backend = ScriptedBackend::new(vec![Err(BackendError::Status {
        status: 401,
        detail: "Invalid credentials".to_string(),
    })]);
    let session = UserSession::default();

    let err = auth_service::login(&backend, "a@example.com", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    assert_eq!(session.auth, AuthState::Anonymous);
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn register_with_mismatched_confirm_never_calls_backend() {
    let backend = ScriptedBackend::unreachable();

    let err = auth_service::register(&backend, "a@example.com", "pw", "different")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn register_with_invalid_email_never_calls_backend() {
    let backend = ScriptedBackend::unreachable();

    let err = auth_service::register(&backend, "not-an-email", "pw", "pw")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn successful_registration_does_not_log_the_user_in() {
    let backend = ScriptedBackend::new(vec![Ok(json!({"id": 2, "email": "b@example.com"}))]);
    let session = UserSession::default();

    let user = auth_service::register(&backend, "b@example.com", "pw", "pw")
        .await
        .unwrap();

    // The created record is returned but the session stays anonymous; the
    // user logs in through the login flow afterwards.
    assert_eq!(user.id, 2);
    assert_eq!(session.auth, AuthState::Anonymous);
}

#[tokio::test]
async fn logout_clears_user_and_history_regardless_of_prior_state() {
    let mut session = UserSession::default();
    session.login(User {
        id: 1,
        email: "a@example.com".to_string(),
    });
    session.push_turn(Role::User, "hello");
    session.push_turn(Role::Assistant, "hi there");

    session.logout();
    assert_eq!(session.auth, AuthState::Anonymous);
    assert!(session.history.is_empty());

    // Logging out an already-anonymous session is a no-op, not an error.
    session.logout();
    assert_eq!(session.auth, AuthState::Anonymous);
    assert!(session.history.is_empty());
}
