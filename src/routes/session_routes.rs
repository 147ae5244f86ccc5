use actix_session::Session;
use actix_web::{get, web, HttpResponse, Responder};

use crate::routes::app_state::AppState;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_session);
}

#[get("/api/session")]
async fn get_session(data: web::Data<AppState>, session: Session) -> impl Responder {
    let view = crate::handlers::session_handler::fetch_session(data, session).await;
    HttpResponse::Ok().json(view)
}
