use axum::{extract::State, routing::get, Json, Router};

use crate::entities::MutationLog;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_logs))
}

/// Stock mutation audit trail, newest first, capped at 100 entries.
#[utoipa::path(
    get,
    path = "/hospital/logs",
    responses((status = 200, description = "Recent stock mutations", body = [MutationLog])),
    tag = "logs"
)]
pub async fn list_logs(State(state): State<AppState>) -> Json<Vec<MutationLog>> {
    Json(state.logs.list().await)
}
