use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;

use crate::handlers::session_handler::ensure_session_id;
use crate::routes::app_state::AppState;
use crate::services::auth_service::{self, AuthError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Maps an auth failure onto the response the form renders inline: 400 for
/// local validation, the backend's own status for rejections, 502 otherwise.
fn auth_error_response(context: &str, error: AuthError) -> HttpResponse {
    match error {
        AuthError::Validation(msg) => HttpResponse::BadRequest().json(json!({ "error": msg })),
        AuthError::Rejected { status, detail } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code)
                .json(json!({ "error": format!("{} failed: {}", context, detail) }))
        }
        AuthError::Unexpected(msg) => HttpResponse::BadGateway()
            .json(json!({ "error": format!("{} error: {}", context, msg) })),
    }
}

pub async fn handle_login(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<LoginRequest>,
) -> HttpResponse {
    let session_id = ensure_session_id(&session);

    match auth_service::login(data.backend.as_ref(), &req_body.email, &req_body.password).await {
        Ok(user) => {
            let mut user_session = data.session_manager.get_or_init(&session_id);
            user_session.login(user.clone());
            data.session_manager.insert(session_id.clone(), user_session);
            info!("Session {} logged in as {}", session_id, user.email);
            HttpResponse::Ok().json(json!({ "message": "Login successful", "user": user }))
        }
        Err(e) => {
            warn!("Login failed for session {}: {}", session_id, e);
            auth_error_response("Login", e)
        }
    }
}

pub async fn handle_register(
    data: web::Data<AppState>,
    req_body: web::Json<RegisterRequest>,
) -> HttpResponse {
    match auth_service::register(
        data.backend.as_ref(),
        &req_body.email,
        &req_body.password,
        &req_body.confirm,
    )
    .await
    {
        // The new account is deliberately not logged in here; the user signs
        // in through the login form afterwards.
        Ok(user) => HttpResponse::Created().json(json!({ "id": user.id, "email": user.email })),
        Err(e) => {
            warn!("Registration failed for {}: {}", req_body.email, e);
            auth_error_response("Registration", e)
        }
    }
}

pub async fn handle_logout(data: web::Data<AppState>, session: Session) -> HttpResponse {
    let session_id = ensure_session_id(&session);
    let mut user_session = data.session_manager.get_or_init(&session_id);
    user_session.logout();
    data.session_manager.insert(session_id.clone(), user_session);
    info!("Session {} logged out", session_id);
    HttpResponse::Ok().json(json!({ "message": "Logged out" }))
}
