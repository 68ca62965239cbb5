mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use guitar_tech_signature::api::middleware::rate_limit::BURST_SIZE;
use guitar_tech_signature::routes::app_router;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

fn app() -> tower_http::normalize_path::NormalizePath<axum::Router> {
    app_router(
        common::create_test_state(common::StubModel::replying("Routed insight.")),
        false,
    )
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let response = app()
        .oneshot(Request::get("/api/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers_are_present() {
    let response = app()
        .oneshot(
            Request::get("/api/guitarists")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_insight_through_full_router() {
    let body = serde_json::json!({
        "guitarist": "Jimi Hendrix",
        "distribution": { "Beginner": 1, "Intermediate": 2, "Advanced": 0 }
    });

    let response = app()
        .oneshot(
            Request::post("/api/insight")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["insight"], "Routed insight.");
}

/// Serves the rate-limited router on an ephemeral port with peer addresses attached.
async fn spawn_limited_app() -> String {
    let app = app_router(
        common::create_test_state(common::StubModel::replying("Limited insight.")),
        true,
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            axum::ServiceExt::<axum::extract::Request>::into_make_service_with_connect_info::<
                SocketAddr,
            >(app),
        )
        .await
        .unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_model_routes_allow_burst_then_replenish_two_per_second() {
    let base = spawn_limited_app().await;
    let client = reqwest::Client::new();
    let body = serde_json::json!({
        "guitarist": "Jimi Hendrix",
        "distribution": { "Beginner": 1, "Intermediate": 2, "Advanced": 0 }
    });

    for _ in 0..BURST_SIZE {
        let response = client
            .post(format!("{}/api/insight", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let limited = client
        .post(format!("{}/api/insight", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(limited.status().as_u16(), 429);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    for _ in 0..2 {
        let response = client
            .post(format!("{}/api/insight", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }
}

#[tokio::test]
async fn test_signature_page_is_rate_limited() {
    let base = spawn_limited_app().await;
    let client = reqwest::Client::new();

    for _ in 0..BURST_SIZE {
        let response = client.get(format!("{}/", base)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let limited = client.get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(limited.status().as_u16(), 429);

    let health = client
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status().as_u16(), 200);
}
