use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness plus a summary of the content loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio",
        "content": {
            "projects": state.content.projects.len(),
            "roles": state.content.profile.roles.len(),
        }
    }))
}
