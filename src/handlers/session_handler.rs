use actix_session::Session;
use actix_web::web;
use log::{error, info};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::user_session::UserSession;
use crate::routes::app_state::AppState;

/// Returns the session id from the cookie, minting and storing a fresh one
/// when the browser arrives without it.
pub fn ensure_session_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>("session_id") {
        return id;
    }
    let id = Uuid::new_v4().to_string();
    if let Err(e) = session.insert("session_id", id.clone()) {
        error!("Failed to store session_id in cookie: {:?}", e);
    } else {
        info!("Stored session_id {} in cookie", id);
    }
    id
}

/// The render view the browser rebuilds the whole page from: the logged-in
/// user (or null) and the full ordered history.
pub fn session_view(user_session: &UserSession) -> Value {
    json!({
        "user": user_session.auth.user(),
        "history": user_session.history,
    })
}

/// Bootstraps the session on page load and returns its current view.
pub async fn fetch_session(data: web::Data<AppState>, session: Session) -> Value {
    let session_id = ensure_session_id(&session);
    let user_session = data.session_manager.get_or_init(&session_id);
    info!(
        "Session {} fetched ({} turns)",
        session_id,
        user_session.history.len()
    );
    session_view(&user_session)
}
