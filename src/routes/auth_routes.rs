use actix_session::Session;
use actix_web::{post, web, Responder};

use crate::handlers::auth_handler::{LoginRequest, RegisterRequest};
use crate::routes::app_state::AppState;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(register).service(logout);
}

#[post("/api/login")]
async fn login(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<LoginRequest>,
) -> impl Responder {
    crate::handlers::auth_handler::handle_login(data, session, req_body).await
}

#[post("/api/register")]
async fn register(
    data: web::Data<AppState>,
    req_body: web::Json<RegisterRequest>,
) -> impl Responder {
    crate::handlers::auth_handler::handle_register(data, req_body).await
}

#[post("/api/logout")]
async fn logout(data: web::Data<AppState>, session: Session) -> impl Responder {
    crate::handlers::auth_handler::handle_logout(data, session).await
}
