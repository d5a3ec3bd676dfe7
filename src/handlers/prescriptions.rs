use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::entities::Prescription;
use crate::errors::ServiceError;
use crate::services::prescriptions::NewPrescription;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusAction {
    /// Either "process" or "finish".
    pub action: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_prescriptions).post(create_prescription))
        .route("/:id/status", put(update_prescription_status))
}

/// List all prescriptions with their items and history.
#[utoipa::path(
    get,
    path = "/hospital/prescriptions",
    responses((status = 200, description = "All prescriptions", body = [Prescription])),
    tag = "prescriptions"
)]
pub async fn list_prescriptions(State(state): State<AppState>) -> Json<Vec<Prescription>> {
    Json(state.prescriptions.list().await)
}

/// Create a prescription in Pending state. Item names and prices are
/// snapshotted from the catalog; stock is untouched until processing.
#[utoipa::path(
    post,
    path = "/hospital/prescriptions",
    request_body = NewPrescription,
    responses(
        (status = 201, description = "Prescription created", body = Prescription),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown medicine id", body = crate::errors::ErrorResponse)
    ),
    tag = "prescriptions"
)]
pub async fn create_prescription(
    State(state): State<AppState>,
    Json(payload): Json<NewPrescription>,
) -> Result<impl IntoResponse, ServiceError> {
    let prescription = state.prescriptions.create(payload).await?;
    Ok((StatusCode::CREATED, Json(prescription)))
}

/// Advance a prescription: `?action=process` deducts stock and moves
/// Pending → Process, `?action=finish` moves Process → Selesai.
#[utoipa::path(
    put,
    path = "/hospital/prescriptions/{id}/status",
    params(
        ("id" = String, Path, description = "Prescription id"),
        StatusAction
    ),
    responses(
        (status = 200, description = "Updated prescription", body = Prescription),
        (status = 400, description = "Unknown action", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown prescription", body = crate::errors::ErrorResponse),
        (status = 409, description = "Illegal status transition", body = crate::errors::ErrorResponse),
        (status = 422, description = "Insufficient stock", body = crate::errors::ErrorResponse)
    ),
    tag = "prescriptions"
)]
pub async fn update_prescription_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StatusAction>,
) -> Result<Json<Prescription>, ServiceError> {
    let prescription = match query.action.as_str() {
        "process" => state.prescriptions.process(&id).await?,
        "finish" => state.prescriptions.finish(&id).await?,
        other => {
            return Err(ServiceError::ValidationError(format!(
                "invalid action '{}', use ?action=process or ?action=finish",
                other
            )))
        }
    };
    Ok(Json(prescription))
}
