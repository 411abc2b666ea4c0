use app_tier_server::api::schema::{DbTestResponse, HealthResponse, WelcomeResponse};
use app_tier_server::sql::schema::DatabaseSettings;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_home() {
    let app = test_utils::setup_mock_api(Some("unreachable"));

    let (status, body): (StatusCode, Value) = test_utils::get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Welcome to 3-Tier HA Architecture",
            "status": "healthy",
            "tier": "application"
        })
    );

    let typed: WelcomeResponse = serde_json::from_value(body).unwrap();
    assert_eq!(typed, WelcomeResponse::default());
}

#[tokio::test]
async fn test_health() {
    let app = test_utils::setup_mock_api(Some("unreachable"));

    let (status, body): (StatusCode, Value) = test_utils::get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let typed: HealthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(typed.status, "ok");
}

#[tokio::test]
async fn test_db_test_connected() {
    let app = test_utils::setup_mock_api(None);

    let (status, body): (StatusCode, Value) = test_utils::get(app, "/db-test").await;

    assert_eq!(status, StatusCode::OK);
    // no message key on success
    assert_eq!(body, json!({ "database": "connected" }));
}

#[tokio::test]
async fn test_db_test_error_message_verbatim() {
    let message = "error returned from database: 1045 (28000): Access denied for user 'admin'";
    let app = test_utils::setup_mock_api(Some(message));

    let (status, body): (StatusCode, DbTestResponse) = test_utils::get(app, "/db-test").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, DbTestResponse::error(message.to_string()));
}

#[tokio::test]
async fn test_db_test_closed_port() {
    let settings = DatabaseSettings {
        host: "127.0.0.1".to_string(),
        ..DatabaseSettings::default()
    };
    let app = test_utils::setup_mysql_api(settings, 1);

    let (status, body): (StatusCode, DbTestResponse) = test_utils::get(app, "/db-test").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.database, "error");
    assert!(!body.message.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_utils::setup_mock_api(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
