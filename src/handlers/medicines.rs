use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entities::Medicine;
use crate::errors::ServiceError;
use crate::services::medicines::NewMedicine;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RestockRequest {
    /// Units to add; must be positive.
    pub amount: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_medicines).post(create_medicine))
        .route("/:id/restock", put(restock_medicine))
}

/// List the full medicine catalog.
#[utoipa::path(
    get,
    path = "/hospital/medicines",
    responses((status = 200, description = "Full medicine catalog", body = [Medicine])),
    tag = "medicines"
)]
pub async fn list_medicines(State(state): State<AppState>) -> Json<Vec<Medicine>> {
    Json(state.medicines.list().await)
}

/// Register a new medicine in the catalog.
#[utoipa::path(
    post,
    path = "/hospital/medicines",
    request_body = NewMedicine,
    responses(
        (status = 201, description = "Medicine created", body = Medicine),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse)
    ),
    tag = "medicines"
)]
pub async fn create_medicine(
    State(state): State<AppState>,
    Json(payload): Json<NewMedicine>,
) -> Result<impl IntoResponse, ServiceError> {
    let medicine = state.medicines.create(payload).await?;
    Ok((StatusCode::CREATED, Json(medicine)))
}

/// Increase a medicine's stock; records an IN mutation log entry.
#[utoipa::path(
    put,
    path = "/hospital/medicines/{id}/restock",
    params(("id" = String, Path, description = "Medicine id")),
    request_body = RestockRequest,
    responses(
        (status = 200, description = "Updated medicine", body = Medicine),
        (status = 400, description = "Non-positive amount", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown medicine", body = crate::errors::ErrorResponse)
    ),
    tag = "medicines"
)]
pub async fn restock_medicine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RestockRequest>,
) -> Result<Json<Medicine>, ServiceError> {
    let medicine = state.medicines.restock(&id, payload.amount).await?;
    Ok(Json(medicine))
}
