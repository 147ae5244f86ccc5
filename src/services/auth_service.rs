use log::info;
use serde_json::json;

use crate::models::user::{is_valid_email, User};
use crate::services::backend_client::{BackendApi, BackendError};

/// Why an auth flow failed, in the order the checks run: local validation
/// (no network call made), backend rejection (status + detail from the
/// backend), or an unexpected transport/parse failure.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("{0}")]
    Unexpected(String),
}

impl From<BackendError> for AuthError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Status { status, detail } => AuthError::Rejected { status, detail },
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

/// Exchanges credentials for the backend's user record. The caller stores
/// the returned user verbatim; on any failure the session is left untouched.
pub async fn login(
    backend: &dyn BackendApi,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    if !is_valid_email(email) {
        return Err(AuthError::Validation(format!("Invalid email: {}", email)));
    }

    let data = backend
        .post("/auth/login", json!({"email": email, "password": password}))
        .await?;

    let user_value = data
        .get("user")
        .cloned()
        .ok_or_else(|| AuthError::Unexpected("login response missing user record".to_string()))?;
    let user: User = serde_json::from_value(user_value)
        .map_err(|e| AuthError::Unexpected(format!("malformed user record: {}", e)))?;

    info!("Login succeeded for {}", user.email);
    Ok(user)
}

/// Creates an account. Password mismatch and email format are checked
/// locally first, so those never reach the backend. The returned record is
/// not logged in automatically; the user signs in separately.
pub async fn register(
    backend: &dyn BackendApi,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<User, AuthError> {
    if password != confirm {
        return Err(AuthError::Validation("Passwords do not match.".to_string()));
    }
    if !is_valid_email(email) {
        return Err(AuthError::Validation(format!("Invalid email: {}", email)));
    }

    let data = backend
        .post("/auth/register", json!({"email": email, "password": password}))
        .await?;

    let user: User = serde_json::from_value(data)
        .map_err(|e| AuthError::Unexpected(format!("malformed user record: {}", e)))?;

    info!("Registered account for {}", user.email);
    Ok(user)
}
