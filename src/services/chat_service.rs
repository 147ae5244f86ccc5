use log::warn;
use serde_json::json;

use crate::models::chat::{ChatResponse, Role};
use crate::models::user_session::UserSession;
use crate::services::backend_client::BackendApi;

/// Processes one chat turn: appends the user's message, asks the backend for
/// a reply, and appends it. A failed call degrades into a synthetic assistant
/// message describing the failure, so a turn never aborts the session and
/// history stays intact for a retry.
pub async fn process_chat(
    user_input: &str,
    user_session: &mut UserSession,
    backend: &dyn BackendApi,
) -> String {
    user_session.push_turn(Role::User, user_input);

    let reply = match fetch_reply(user_input, backend).await {
        Ok(reply) => reply,
        Err(description) => {
            warn!("Chat turn failed: {}", description);
            format!("Error contacting API: {}", description)
        }
    };

    user_session.push_turn(Role::Assistant, reply.clone());
    reply
}

async fn fetch_reply(user_input: &str, backend: &dyn BackendApi) -> Result<String, String> {
    let data = backend
        .post("/chat", json!({"message": user_input}))
        .await
        .map_err(|e| e.to_string())?;
    let parsed: ChatResponse =
        serde_json::from_value(data).map_err(|e| format!("malformed chat response: {}", e))?;
    Ok(parsed.reply)
}
