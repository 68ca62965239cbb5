mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use guitar_tech_signature::api::handlers::health_handler;

fn server(state: guitar_tech_signature::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = server(common::create_test_state(common::StubModel::replying("ok")));

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["model"]["status"], "ok");
    assert_eq!(json["checks"]["dataset"]["status"], "ok");
    assert_eq!(
        json["checks"]["dataset"]["message"],
        "3 guitarists, 5 techniques, 6 sources"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = server(common::create_test_state(common::StubModel::replying("ok")));

    let response = server.get("/api/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_without_api_key_is_still_ok() {
    let mut state = common::create_test_state(common::StubModel::failing());
    state.model_configured = false;
    let server = server(state);

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["model"]["status"], "degraded");
}
