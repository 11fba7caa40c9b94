pub mod auth;
pub mod customers;
pub mod hotels;
pub mod reservations;
pub mod rooms;

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public lookups, token-protected
/// booking routes and the API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/staywell/hotels/register", post(hotels::register))
        .route("/staywell/customers/register", post(customers::register))
        .route("/staywell/hotels/in-city/:city", get(hotels::in_city))
        .route("/staywell/hotels/:id", get(hotels::get_one))
        .route("/staywell/hotels/:id/rooms/available", get(hotels::available_rooms));

    let protected = Router::new()
        .route("/staywell/hotels/near-me", get(hotels::near_me))
        .route("/staywell/hotels/me", put(hotels::update_me).delete(hotels::deactivate_me))
        .route("/staywell/rooms", post(rooms::create).get(rooms::list))
        .route("/staywell/rooms/:id", put(rooms::update).delete(rooms::remove))
        .route("/staywell/reservations", post(reservations::create).get(reservations::list))
        .route("/staywell/reservations/:id/close", put(reservations::close))
        .route_layer(middleware::from_fn_with_state(state.clone(), crate::auth::require_principal));

    public
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
