use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use car_yard::config::{DatabaseConfig, EnvironmentConfig};
use car_yard::create_app;
use car_yard::state::AppState;
use car_yard::utils::jwt::{generate_token, JwtConfig};

const TEST_SECRET: &str = "integration-test-secret";

// Pool perezoso: solo /health intenta tocar la base de datos
fn create_test_app() -> Router {
    let pool = DatabaseConfig::default()
        .create_lazy_pool()
        .expect("lazy pool");

    let mut config = EnvironmentConfig::default();
    config.jwt_secret = TEST_SECRET.to_string();

    create_app(AppState::new(pool, config))
}

fn bearer() -> String {
    let jwt = JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration: 3600,
    };
    let token = generate_token(Uuid::new_v4(), "admin", &jwt).unwrap();
    format!("Bearer {}", token)
}

fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    match body["database"].as_str() {
        Some("connected") => assert_eq!(body["status"], "ok"),
        Some("disconnected") => assert_eq!(body["status"], "degraded"),
        other => panic!("unexpected database status: {:?}", other),
    }
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let request = Request::builder().uri("/api/cars").body(Body::empty()).unwrap();
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_dashboard_requires_token() {
    let request = Request::builder()
        .uri("/api/dashboard/stats")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let request = Request::builder()
        .uri("/api/sales")
        .header(header::AUTHORIZATION, "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "JWT_ERROR");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let other = JwtConfig {
        secret: "some-other-secret".to_string(),
        expiration: 3600,
    };
    let token = generate_token(Uuid::new_v4(), "admin", &other).unwrap();

    let request = Request::builder()
        .uri("/api/customers")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_with_valid_token() {
    let auth = bearer();
    let request = json_request(Method::POST, "/api/auth/logout", Some(&auth), json!({}));
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully");
}

#[tokio::test]
async fn test_me_requires_token() {
    let request = Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap();
    let (status, _) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validates_before_lookup() {
    let request = json_request(
        Method::POST,
        "/api/auth/login",
        None,
        json!({ "username": "", "password": "" }),
    );
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_car_rejects_invalid_plate() {
    let auth = bearer();
    let request = json_request(
        Method::POST,
        "/api/cars",
        Some(&auth),
        json!({
            "registration_plate": "NOT-A-PLATE",
            "make": "Toyota",
            "model": "Corolla",
            "year": 2012,
            "registration_expiry": "2025-06-01",
            "wof_expiry": "2025-03-01",
            "purchase_date": "2024-11-20",
            "purchase_price": "4500.00"
        }),
    );
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["registration_plate"].is_array());
}

#[tokio::test]
async fn test_create_car_rejects_negative_price() {
    let auth = bearer();
    let request = json_request(
        Method::POST,
        "/api/cars",
        Some(&auth),
        json!({
            "registration_plate": "abc123",
            "make": "Toyota",
            "model": "Corolla",
            "year": 2012,
            "registration_expiry": "2025-06-01",
            "wof_expiry": "2025-03-01",
            "purchase_date": "2024-11-20",
            "purchase_price": "-1"
        }),
    );
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["purchase_price"].is_array());
}

#[tokio::test]
async fn test_service_record_rejects_unknown_type() {
    let auth = bearer();
    let uri = format!("/api/cars/{}/services", Uuid::new_v4());
    let request = json_request(
        Method::POST,
        &uri,
        Some(&auth),
        json!({
            "service_date": "2024-12-01",
            "service_type": "detailing",
            "description": "Full valet",
            "cost": "120.00"
        }),
    );
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["service_type"].is_array());
}

#[tokio::test]
async fn test_blank_note_rejected() {
    let auth = bearer();
    let uri = format!("/api/notes/{}", Uuid::new_v4());
    let request = json_request(Method::PUT, &uri, Some(&auth), json!({ "note": "   " }));
    let (status, _) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_service_record_update_path_under_cars() {
    let auth = bearer();
    let uri = format!("/api/cars/services/{}", Uuid::new_v4());
    let request = json_request(
        Method::PUT,
        &uri,
        Some(&auth),
        json!({ "service_type": "detailing" }),
    );
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["service_type"].is_array());
}

#[tokio::test]
async fn test_blank_note_rejected_on_car_notes_path() {
    let auth = bearer();
    let uri = format!("/api/notes/car/{}", Uuid::new_v4());
    let request = json_request(Method::POST, &uri, Some(&auth), json!({ "note": "" }));
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_short_new_password_rejected() {
    let auth = bearer();
    let request = json_request(
        Method::PUT,
        "/api/settings/password",
        Some(&auth),
        json!({ "currentPassword": "admin123", "newPassword": "abc" }),
    );
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder().uri("/api/nope").body(Body::empty()).unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
