use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use uuid::Uuid;

use models::Role;
use service::auth::domain::LoginInput;

use crate::auth::AUTH_COOKIE;
use crate::errors::{ApiJson, JsonApiError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct LoginOutput { pub id: Uuid, pub email: String, pub role: Role, pub token: String }

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In"), (status = 401, description = "Unauthorized")))]
pub async fn login(State(state): State<AppState>, jar: CookieJar, WithRejection(Json(input), _): ApiJson<LoginInput>) -> Result<(CookieJar, Json<LoginOutput>), JsonApiError> {
    let session = state.auth.login(input).await?;
    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let p = session.principal;
    Ok((jar.add(cookie), Json(LoginOutput { id: p.id, email: p.email, role: p.role, token: session.token })))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::from(AUTH_COOKIE));
    (jar, StatusCode::NO_CONTENT)
}
