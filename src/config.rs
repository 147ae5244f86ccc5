use std::env;
use std::time::Duration;

pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
}

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Every backend call aborts after this long and surfaces as a generic failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URL of the remote support backend.
pub fn api_base() -> String {
    env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Address this server listens on.
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}
