use actix_session::Session;
use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;

use crate::handlers::session_handler::ensure_session_id;
use crate::routes::app_state::AppState;
use crate::services::chat_service;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

pub async fn handle_chat_request(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<ChatRequest>,
) -> HttpResponse {
    let session_id = ensure_session_id(&session);
    let mut user_session = data.session_manager.get_or_init(&session_id);

    // Chat is gated on login; an anonymous session gets the notice and no
    // state change.
    if !user_session.auth.is_authenticated() {
        warn!("Rejected chat for anonymous session {}", session_id);
        return HttpResponse::Unauthorized()
            .json(json!({ "error": "Please log in to start chatting." }));
    }

    info!(
        "Processing message for session {}: {}",
        session_id, req_body.message
    );
    let reply =
        chat_service::process_chat(&req_body.message, &mut user_session, data.backend.as_ref())
            .await;
    data.session_manager.insert(session_id, user_session);

    HttpResponse::Ok().json(json!({ "reply": reply }))
}
