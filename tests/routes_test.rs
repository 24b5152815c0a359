use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use tower::ServiceExt;

use gymbook::api::routes::create_routes;
use gymbook::auth::Claims;
use gymbook::models::UserRole;

const SECRET: &str = "test_secret";

/// The Mongo client connects lazily, so a router over an unreachable
/// database is fine for everything rejected before the service layer runs.
async fn test_app() -> axum::Router {
    let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
        .await
        .unwrap();
    create_routes(client.database("gymbook_test"), SECRET)
}

fn token(role: UserRole) -> String {
    let claims = Claims {
        sub: Some(ObjectId::new().to_hex()),
        email: Some("user@example.com".to_string()),
        given_name: Some("Ana".to_string()),
        family_name: Some("Silva".to_string()),
        role: Some(role),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iat: chrono::Utc::now().timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let response = test_app()
        .await
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_bookings_require_authentication() {
    let response = test_app()
        .await
        .oneshot(Request::get("/api/bookings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_malformed_bearer_header_is_rejected() {
    let response = test_app()
        .await
        .oneshot(
            Request::get("/api/bookings")
                .header(header::AUTHORIZATION, "Token abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_missing_identity_fields_is_rejected() {
    let claims = Claims {
        sub: Some(ObjectId::new().to_hex()),
        email: None,
        given_name: Some("Ana".to_string()),
        family_name: Some("Silva".to_string()),
        role: Some(UserRole::Client),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iat: chrono::Utc::now().timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = test_app()
        .await
        .oneshot(
            Request::get("/api/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_admin_routes_reject_clients() {
    let response = test_app()
        .await
        .oneshot(
            Request::get("/api/admin/workout-options")
                .header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", token(UserRole::Client)),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Insufficient permissions");
}

#[tokio::test]
async fn test_malformed_coach_id_is_a_bad_request() {
    let response = test_app()
        .await
        .oneshot(
            Request::get("/api/coaches/not-an-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid id");
}

#[tokio::test]
async fn test_booking_payload_reports_every_violation() {
    let response = test_app()
        .await
        .oneshot(
            Request::post("/api/bookings")
                .header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", token(UserRole::Client)),
                )
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");

    let details: Vec<String> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|message| message.as_str().unwrap().to_string())
        .collect();
    assert_eq!(details.len(), 3);
    assert!(details.contains(&"Coach is required".to_string()));
    assert!(details.contains(&"Time slot is required".to_string()));
    assert!(details.contains(&"Date is required".to_string()));
}

#[tokio::test]
async fn test_workout_option_payload_reports_every_violation() {
    let response = test_app()
        .await
        .oneshot(
            Request::post("/api/admin/workout-options")
                .header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", token(UserRole::Admin)),
                )
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{ "name": "", "coaches_id": ["nope"] }"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;

    let details: Vec<String> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|message| message.as_str().unwrap().to_string())
        .collect();
    assert_eq!(details.len(), 2);
    assert!(details.contains(&"Workout name is required".to_string()));
    assert!(details.contains(&"Coach references must be valid object ids".to_string()));
}
