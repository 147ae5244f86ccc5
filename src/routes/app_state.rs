use std::sync::Arc;

use crate::models::session_manager::GlobalSessionManager;
use crate::services::backend_client::BackendApi;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
    pub session_manager: GlobalSessionManager,
}
