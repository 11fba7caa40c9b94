use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use models::reservation;
use service::auth::Principal;
use service::reservation_service::{self, NewReservation};

use crate::errors::{ApiJson, ApiPath, JsonApiError};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/staywell/reservations", tag = "reservations",
    request_body = crate::openapi::NewReservationDoc,
    responses(
        (status = 201, description = "Booked"),
        (status = 400, description = "Invalid dates"),
        (status = 403, description = "Customers only"),
        (status = 404, description = "Room missing or already booked")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(input), _): ApiJson<NewReservation>,
) -> Result<(StatusCode, Json<reservation::Model>), JsonApiError> {
    let created = reservation_service::create_reservation(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/staywell/reservations", tag = "reservations", responses((status = 200, description = "Reservations of the caller")))]
pub async fn list(State(state): State<AppState>, Extension(principal): Extension<Principal>) -> Result<Json<Vec<reservation::Model>>, JsonApiError> {
    Ok(Json(reservation_service::reservations_for(&state.db, &principal).await?))
}

#[utoipa::path(
    put, path = "/staywell/reservations/{id}/close", tag = "reservations",
    params(("id" = Uuid, Path, description = "Reservation id")),
    responses((status = 200, description = "Closed"), (status = 404, description = "Not Found"))
)]
pub async fn close(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): ApiPath<Uuid>,
) -> Result<Json<reservation::Model>, JsonApiError> {
    Ok(Json(reservation_service::close_reservation(&state.db, &principal, id).await?))
}
