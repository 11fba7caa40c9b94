use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use serde_json::{json, Value};
use service::auth::service::AuthConfig;
use tower::ServiceExt;

use server::routes;
use server::state::AppState;

const PASSWORD: &str = "S3curePass!";

async fn build_app() -> anyhow::Result<Router> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    let state = AppState::new(db, AuthConfig::new("test-secret"));
    Ok(routes::build_router(state, tower_http::cors::CorsLayer::very_permissive()))
}

async fn call(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {}", t));
    }
    let req = match body {
        Some(b) => req.header(header::CONTENT_TYPE, "application/json").body(Body::from(b.to_string()))?,
        None => req.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn address() -> Value {
    json!({"street": "MI Road", "city": "Jaipur", "state": "Rajasthan", "pincode": "302001", "country": "India"})
}

async fn login(app: &Router, email: &str) -> anyhow::Result<String> {
    let (status, body) = call(app, "POST", "/auth/login", None, Some(json!({"email": email, "password": PASSWORD}))).await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    Ok(body["token"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn booking_and_guard_flow() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, hotel) = call(&app, "POST", "/staywell/hotels/register", None, Some(json!({
        "name": "MyHotel", "email": "desk@myhotel.in", "password": PASSWORD,
        "phone": "+91 98290 00000", "address": address(), "hotel_type": "hotel"
    }))).await?;
    assert_eq!(status, StatusCode::CREATED, "{}", hotel);
    assert!(hotel.get("password_hash").is_none());
    let hotel_id = hotel["id"].as_str().unwrap_or_default().to_string();

    let (status, _) = call(&app, "POST", "/staywell/customers/register", None, Some(json!({
        "name": "Asha", "email": "asha@mail.in", "password": PASSWORD,
        "phone": "+91 98000 11111", "address": address()
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, "POST", "/staywell/customers/register", None, Some(json!({
        "name": "Dup", "email": "desk@myhotel.in", "password": PASSWORD,
        "phone": "+91 98000 11111", "address": address()
    }))).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let hotel_token = login(&app, "desk@myhotel.in").await?;
    let guest_token = login(&app, "asha@mail.in").await?;

    let (status, room) = call(&app, "POST", "/staywell/rooms", Some(&hotel_token), Some(json!({
        "room_number": 1001, "room_type": "ac", "capacity": 2, "price": 5000.0
    }))).await?;
    assert_eq!(status, StatusCode::CREATED, "{}", room);
    let room_id = room["id"].as_str().unwrap_or_default().to_string();

    let (status, _) = call(&app, "POST", "/staywell/rooms", Some(&guest_token), Some(json!({
        "room_number": 7, "room_type": "ac", "capacity": 2, "price": 10.0
    }))).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let avail = format!("/staywell/hotels/{}/rooms/available?check_in=2024-01-10&check_out=2024-01-12", hotel_id);
    let (status, rooms) = call(&app, "GET", &avail, None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms[0]["room_number"], 1001);

    let (status, booking) = call(&app, "POST", "/staywell/reservations", Some(&guest_token), Some(json!({
        "room_id": room_id, "check_in": "2024-01-10", "check_out": "2024-01-12"
    }))).await?;
    assert_eq!(status, StatusCode::CREATED, "{}", booking);
    assert_eq!(booking["status"], "open");

    let (status, body) = call(&app, "GET", &avail, None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No Availability");

    let room_uri = format!("/staywell/rooms/{}", room_id);
    let (status, _) = call(&app, "DELETE", &room_uri, Some(&hotel_token), Some(json!({"password": "wrong-password"}))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = call(&app, "DELETE", &room_uri, Some(&hotel_token), Some(json!({"password": PASSWORD}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["blocked"], true);
    assert_eq!(body["availability_updated"], true);

    let (status, updated) = call(&app, "PUT", &room_uri, Some(&hotel_token), Some(json!({
        "password": PASSWORD, "update": {"field": "price", "value": 4500.0}
    }))).await?;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(updated["price"], 4500.0);
    assert_eq!(updated["available"], false);

    let close_uri = format!("/staywell/reservations/{}/close", booking["id"].as_str().unwrap_or_default());
    let (status, closed) = call(&app, "PUT", &close_uri, Some(&guest_token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(closed["status"], "closed");

    let (status, body) = call(&app, "DELETE", &room_uri, Some(&hotel_token), Some(json!({"password": PASSWORD}))).await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["blocked"], false);

    let (status, mine) = call(&app, "GET", "/staywell/reservations", Some(&guest_token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine[0]["room_id"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn protected_routes_need_a_valid_token() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, "GET", "/staywell/rooms", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["code"].is_number());

    let (status, body) = call(&app, "GET", "/staywell/rooms", Some("not.a.jwt"), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 2004);

    let (status, body) = call(&app, "GET", "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn cookie_session_and_hotel_update() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = call(&app, "POST", "/staywell/hotels/register", None, Some(json!({
        "name": "Rambagh", "email": "desk@rambagh.in", "password": PASSWORD,
        "phone": "+91 98290 00001", "address": address(), "hotel_type": "resort"
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let token = login(&app, "desk@rambagh.in").await?;

    let req = Request::builder()
        .method("PUT")
        .uri("/staywell/hotels/me")
        .header(header::COOKIE, format!("auth_token={}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"password": PASSWORD, "update": {"field": "hotel_type", "value": "lodge"}}).to_string()))?;
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::ACCEPTED);
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let hotel: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(hotel["hotel_type"], "lodge");

    let (status, list) = call(&app, "GET", "/staywell/hotels/in-city/Jaipur?page=1&per_page=10", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));

    let (status, _) = call(&app, "GET", "/staywell/hotels/in-city/Pune", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&app, "DELETE", "/staywell/hotels/me", Some(&token), Some(json!({"password": PASSWORD}))).await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let (status, _) = call(&app, "POST", "/auth/login", None, Some(json!({"email": "desk@rambagh.in", "password": PASSWORD}))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn malformed_input_is_a_json_validation_error() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = call(&app, "POST", "/staywell/hotels/register", None, Some(json!({
        "name": "Castle", "email": "desk@castle.in", "password": PASSWORD,
        "phone": "+91 98290 00002", "address": address(), "hotel_type": "castle"
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["code"], 2001);

    let (status, hotel) = call(&app, "POST", "/staywell/hotels/register", None, Some(json!({
        "name": "MyHotel", "email": "desk@myhotel.in", "password": PASSWORD,
        "phone": "+91 98290 00000", "address": address(), "hotel_type": "hotel"
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let token = login(&app, "desk@myhotel.in").await?;
    let (status, room) = call(&app, "POST", "/staywell/rooms", Some(&token), Some(json!({
        "room_number": 1001, "room_type": "ac", "capacity": 2, "price": 5000.0
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);

    let room_uri = format!("/staywell/rooms/{}", room["id"].as_str().unwrap_or_default());
    let (status, body) = call(&app, "PUT", &room_uri, Some(&token), Some(json!({
        "password": PASSWORD, "update": {"field": "capacity", "value": "two"}
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2001);

    let half = format!("/staywell/hotels/{}/rooms/available?check_in=2024-01-10", hotel["id"].as_str().unwrap_or_default());
    let (status, body) = call(&app, "GET", &half, None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2001);

    let (status, body) = call(&app, "GET", "/staywell/hotels/not-a-uuid", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].is_number());
    Ok(())
}
