use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use helpdesk_chat::services::backend_client::{BackendApi, BackendError};

/// Backend stub that records every call and replays scripted responses in
/// order. Once the script runs out it reports an unreachable backend.
pub struct ScriptedBackend {
    calls: Mutex<Vec<(String, Value)>>,
    responses: Mutex<VecDeque<Result<Value, BackendError>>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<Result<Value, BackendError>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    pub fn unreachable() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendApi for ScriptedBackend {
    async fn post(&self, path: &str, payload: Value) -> Result<Value, BackendError> {
        self.calls.lock().unwrap().push((path.to_string(), payload));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Connection("connection refused".to_string())))
    }
}
