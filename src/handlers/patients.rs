use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use crate::entities::Patient;
use crate::errors::ServiceError;
use crate::services::patients::NewPatient;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patients).post(add_patient))
        .route("/:id", delete(remove_patient))
}

/// List the patient registry.
#[utoipa::path(
    get,
    path = "/hospital/patients",
    responses((status = 200, description = "All patients", body = [Patient])),
    tag = "patients"
)]
pub async fn list_patients(State(state): State<AppState>) -> Json<Vec<Patient>> {
    Json(state.patients.list().await)
}

/// Register a patient; status starts as Waiting.
#[utoipa::path(
    post,
    path = "/hospital/patients",
    request_body = NewPatient,
    responses(
        (status = 201, description = "Patient registered", body = Patient),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse)
    ),
    tag = "patients"
)]
pub async fn add_patient(
    State(state): State<AppState>,
    Json(payload): Json<NewPatient>,
) -> Result<impl IntoResponse, ServiceError> {
    let patient = state.patients.register(payload).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// Remove a patient from the registry.
#[utoipa::path(
    delete,
    path = "/hospital/patients/{id}",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 204, description = "Patient removed"),
        (status = 404, description = "Unknown patient", body = crate::errors::ErrorResponse)
    ),
    tag = "patients"
)]
pub async fn remove_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    state.patients.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
