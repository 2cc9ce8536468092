use axum::{extract::State, http::StatusCode};

use hrportal_core::health::readiness_status;

use crate::state::AppState;

/// Handler for `GET /readyz`: database reachable and photo directory present.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    if let Err(e) = state.db.ping().await {
        return readiness_status(Err(e));
    }
    readiness_status(state.assets.probe().await)
}
