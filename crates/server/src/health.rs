use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use fridgefix_core::ConversationStore;
use serde::Serialize;

use crate::bootstrap::SharedEngine;

#[derive(Clone)]
pub struct HealthState {
    engine: SharedEngine,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_conversations: usize,
    pub checked_at: String,
}

pub fn router(engine: SharedEngine) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { engine })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let payload = HealthResponse {
        status: "OK",
        active_conversations: state.engine.store().conversation_count(),
        checked_at: Utc::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(payload))
}
