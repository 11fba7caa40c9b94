use axum::{extract::{Request, State}, http::header, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Bearer header first, then the `auth_token` cookie.
fn extract_token(req: &Request) -> Result<String, JsonApiError> {
    if let Some(h) = req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        let Some(token) = h.strip_prefix("Bearer ") else {
            tracing::warn!(path = %req.uri().path(), "invalid Authorization format (expect Bearer)");
            return Err(JsonApiError::unauthorized("expected a Bearer token"));
        };
        return Ok(token.trim().to_string());
    }
    let jar = CookieJar::from_headers(req.headers());
    match jar.get(AUTH_COOKIE).map(|c| c.value().to_string()) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => {
            tracing::warn!(path = %req.uri().path(), "missing Authorization header and auth_token cookie");
            Err(JsonApiError::unauthorized("missing token"))
        }
    }
}

/// Decode the caller and hand it to handlers as an `Extension<Principal>`.
pub async fn require_principal(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let token = extract_token(&req)?;
    let principal = state.auth.decode_principal(&token).map_err(|e| {
        tracing::warn!(path = %req.uri().path(), code = e.code(), err = %e, "token validation failed");
        JsonApiError::from(e)
    })?;
    tracing::debug!(principal_id = %principal.id, role = %principal.role, "principal_resolved");
    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}
