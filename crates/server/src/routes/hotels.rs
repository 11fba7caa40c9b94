use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use models::reservation::StayRange;
use models::{hotel, room};
use service::auth::Principal;
use service::pagination::Pagination;
use service::updates::HotelUpdate;
use service::{availability, guard, hotel_service, updates, GuardOutcome, ServiceError};

use crate::errors::{ApiJson, ApiPath, ApiQuery, JsonApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<PageQuery> for Pagination {
    fn from(q: PageQuery) -> Self {
        let d = Pagination::default();
        Pagination { page: q.page.unwrap_or(d.page), per_page: q.per_page.unwrap_or(d.per_page) }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StayQuery {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl StayQuery {
    fn range(&self) -> Result<Option<StayRange>, JsonApiError> {
        match (self.check_in, self.check_out) {
            (Some(a), Some(b)) => StayRange::new(a, b)
                .map(Some)
                .map_err(|e| JsonApiError::from(ServiceError::from(e))),
            (None, None) => Ok(None),
            _ => Err(JsonApiError::bad_request("check_in and check_out must be given together")),
        }
    }
}

/// Password-confirmed single-field change.
#[derive(Debug, Deserialize)]
pub struct UpdateHotelInput {
    pub password: String,
    pub update: HotelUpdate,
}

#[derive(Debug, Deserialize)]
pub struct PasswordInput {
    pub password: String,
}

#[derive(Serialize)]
struct GuardBody {
    blocked: bool,
    availability_updated: bool,
    message: &'static str,
}

/// 200 when the target is gone, 409 with both flags when bookings held it.
pub(crate) fn guard_response(outcome: GuardOutcome, removed: &'static str) -> Response {
    if outcome.blocked {
        let body = GuardBody {
            blocked: true,
            availability_updated: outcome.availability_updated,
            message: "there are open reservations; availability has been switched off",
        };
        return (StatusCode::CONFLICT, Json(body)).into_response();
    }
    let body = GuardBody { blocked: false, availability_updated: false, message: removed };
    (StatusCode::OK, Json(body)).into_response()
}

#[utoipa::path(
    post, path = "/staywell/hotels/register", tag = "hotels",
    request_body = crate::openapi::RegisterHotelDoc,
    responses(
        (status = 201, description = "Registered"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Email or name already registered")
    )
)]
pub async fn register(State(state): State<AppState>, WithRejection(Json(input), _): ApiJson<hotel_service::RegisterHotelInput>) -> Result<(StatusCode, Json<hotel::Model>), JsonApiError> {
    let created = hotel_service::register_hotel(&state.db, input).await?;
    info!(hotel_id = %created.id, "hotel registered via api");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/staywell/hotels/{id}", tag = "hotels", params(("id" = Uuid, Path, description = "Hotel id")), responses((status = 200, description = "Hotel"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<AppState>, WithRejection(Path(id), _): ApiPath<Uuid>) -> Result<Json<hotel::Model>, JsonApiError> {
    Ok(Json(hotel_service::get_hotel(&state.db, id).await?))
}

#[utoipa::path(get, path = "/staywell/hotels/in-city/{city}", tag = "hotels", params(("city" = String, Path, description = "City name"), PageQuery), responses((status = 200, description = "Hotels"), (status = 404, description = "No hotels in city")))]
pub async fn in_city(State(state): State<AppState>, WithRejection(Path(city), _): ApiPath<String>, WithRejection(Query(q), _): ApiQuery<PageQuery>) -> Result<Json<Vec<hotel::Model>>, JsonApiError> {
    Ok(Json(hotel_service::hotels_in_city(&state.db, &city, q.into()).await?))
}

#[utoipa::path(
    get, path = "/staywell/hotels/{id}/rooms/available", tag = "hotels",
    params(("id" = Uuid, Path, description = "Hotel id"), StayQuery),
    responses(
        (status = 200, description = "Bookable rooms"),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Hotel missing or nothing available")
    )
)]
pub async fn available_rooms(State(state): State<AppState>, WithRejection(Path(id), _): ApiPath<Uuid>, WithRejection(Query(q), _): ApiQuery<StayQuery>) -> Result<Json<Vec<room::Model>>, JsonApiError> {
    let range = q.range()?;
    Ok(Json(availability::available_rooms(&state.db, id, range).await?))
}

#[utoipa::path(get, path = "/staywell/hotels/near-me", tag = "hotels", responses((status = 200, description = "Hotels in the customer's city"), (status = 403, description = "Customers only")))]
pub async fn near_me(State(state): State<AppState>, Extension(principal): Extension<Principal>) -> Result<Json<Vec<hotel::Model>>, JsonApiError> {
    Ok(Json(hotel_service::hotels_near(&state.db, &principal).await?))
}

#[utoipa::path(
    put, path = "/staywell/hotels/me", tag = "hotels",
    request_body = crate::openapi::UpdateHotelDoc,
    responses(
        (status = 202, description = "Updated"),
        (status = 401, description = "Wrong password"),
        (status = 409, description = "Email or name taken")
    )
)]
pub async fn update_me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(input), _): ApiJson<UpdateHotelInput>,
) -> Result<(StatusCode, Json<hotel::Model>), JsonApiError> {
    let updated = updates::apply_hotel_update(&state.db, &principal, &input.password, input.update).await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

#[utoipa::path(
    delete, path = "/staywell/hotels/me", tag = "hotels",
    request_body = crate::openapi::PasswordDoc,
    responses(
        (status = 200, description = "Hotel deactivated"),
        (status = 401, description = "Wrong password"),
        (status = 409, description = "Open reservations; rooms switched off")
    )
)]
pub async fn deactivate_me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(input), _): ApiJson<PasswordInput>,
) -> Result<Response, JsonApiError> {
    let today = chrono::Utc::now().date_naive();
    let outcome = guard::deactivate_hotel(&state.db, &principal, &input.password, today).await?;
    Ok(guard_response(outcome, "hotel deactivated"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate { NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap() }

    #[test]
    fn stay_query_needs_both_dates() {
        let both = StayQuery { check_in: Some(d("2024-01-10")), check_out: Some(d("2024-01-12")) };
        assert!(both.range().unwrap().is_some());
        assert!(StayQuery { check_in: None, check_out: None }.range().unwrap().is_none());
        let half = StayQuery { check_in: Some(d("2024-01-10")), check_out: None };
        let err = half.range().unwrap_err();
        assert_eq!((err.status, err.code), (StatusCode::BAD_REQUEST, 2001));
        let inverted = StayQuery { check_in: Some(d("2024-01-12")), check_out: Some(d("2024-01-10")) };
        assert_eq!(inverted.range().unwrap_err().code, 2001);
    }

    #[test]
    fn page_query_defaults() {
        let p: Pagination = PageQuery { page: None, per_page: Some(5) }.into();
        assert_eq!((p.page, p.per_page), (1, 5));
    }
}
