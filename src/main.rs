use std::sync::Arc;

use actix_files::Files;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::{middleware::Logger, web, App, HttpServer};

use helpdesk_chat::config;
use helpdesk_chat::models::session_manager::GlobalSessionManager;
use helpdesk_chat::routes::app_state::AppState;
use helpdesk_chat::routes::{auth_routes, chat_routes, session_routes};
use helpdesk_chat::services::backend_client::{BackendApi, BackendClient};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    config::init_logging();

    let api_base = config::api_base();
    let backend: Arc<dyn BackendApi> = Arc::new(BackendClient::new(&api_base)?);
    let state = AppState {
        backend,
        session_manager: GlobalSessionManager::new(),
    };

    // Session cookies are signed with a per-process key; session state lives
    // in memory and does not survive a restart.
    let session_key = Key::generate();

    let bind_addr = config::bind_addr();
    log::info!(
        "Starting server on http://{} (backend at {})",
        bind_addr,
        api_base
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(state.clone()))
            .configure(session_routes::init_routes)
            .configure(auth_routes::init_routes)
            .configure(chat_routes::init_routes)
            // Serve the browser UI (including index.html) from ./static.
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
