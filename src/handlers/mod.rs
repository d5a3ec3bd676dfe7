pub mod health;
pub mod logs;
pub mod medicines;
pub mod patients;
pub mod prescriptions;

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::AppState;

/// All hospital resources, mounted under `/hospital` as the dashboard's API
/// client expects.
pub fn hospital_router() -> Router<AppState> {
    Router::new()
        .nest("/medicines", medicines::router())
        .nest("/prescriptions", prescriptions::router())
        .nest("/patients", patients::router())
        .nest("/logs", logs::router())
}

/// The full application router, without middleware layers.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(openapi_spec))
        .nest("/hospital", hospital_router())
        .with_state(state)
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}
