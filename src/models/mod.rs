pub mod chat;
pub mod session_manager;
pub mod user;
pub mod user_session;
