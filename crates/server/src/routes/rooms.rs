use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension, Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use uuid::Uuid;

use models::room::{self, NewRoom};
use service::auth::Principal;
use service::updates::RoomUpdate;
use service::{guard, room_service, updates};

use crate::errors::{ApiJson, ApiPath, JsonApiError};
use crate::routes::hotels::{guard_response, PasswordInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateRoomInput {
    pub password: String,
    pub update: RoomUpdate,
}

#[utoipa::path(
    post, path = "/staywell/rooms", tag = "rooms",
    request_body = crate::openapi::NewRoomDoc,
    responses(
        (status = 201, description = "Room added"),
        (status = 403, description = "Hotels only"),
        (status = 409, description = "Room number taken")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(input), _): ApiJson<NewRoom>,
) -> Result<(StatusCode, Json<room::Model>), JsonApiError> {
    let created = room_service::add_room(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/staywell/rooms", tag = "rooms", responses((status = 200, description = "Rooms of the hotel"), (status = 404, description = "No rooms")))]
pub async fn list(State(state): State<AppState>, Extension(principal): Extension<Principal>) -> Result<Json<Vec<room::Model>>, JsonApiError> {
    Ok(Json(room_service::rooms_of_hotel(&state.db, &principal).await?))
}

#[utoipa::path(
    put, path = "/staywell/rooms/{id}", tag = "rooms",
    params(("id" = Uuid, Path, description = "Room id")),
    request_body = crate::openapi::UpdateRoomDoc,
    responses(
        (status = 202, description = "Updated"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): ApiPath<Uuid>,
    WithRejection(Json(input), _): ApiJson<UpdateRoomInput>,
) -> Result<(StatusCode, Json<room::Model>), JsonApiError> {
    let updated = updates::apply_room_update(&state.db, &principal, id, &input.password, input.update).await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

#[utoipa::path(
    delete, path = "/staywell/rooms/{id}", tag = "rooms",
    params(("id" = Uuid, Path, description = "Room id")),
    request_body = crate::openapi::PasswordDoc,
    responses(
        (status = 200, description = "Room removed"),
        (status = 401, description = "Wrong password"),
        (status = 409, description = "Open reservations; room switched off")
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): ApiPath<Uuid>,
    WithRejection(Json(input), _): ApiJson<PasswordInput>,
) -> Result<Response, JsonApiError> {
    let outcome = guard::remove_room(&state.db, &principal, id, &input.password).await?;
    Ok(guard_response(outcome, "room removed"))
}
