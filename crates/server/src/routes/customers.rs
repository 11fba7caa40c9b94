use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use tracing::info;

use models::customer;
use service::customer_service::{self, RegisterCustomerInput};

use crate::errors::{ApiJson, JsonApiError};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/staywell/customers/register", tag = "customers",
    request_body = crate::openapi::RegisterCustomerDoc,
    responses(
        (status = 201, description = "Registered"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(State(state): State<AppState>, WithRejection(Json(input), _): ApiJson<RegisterCustomerInput>) -> Result<(StatusCode, Json<customer::Model>), JsonApiError> {
    let created = customer_service::register_customer(&state.db, input).await?;
    info!(customer_id = %created.id, "customer registered via api");
    Ok((StatusCode::CREATED, Json(created)))
}
