//! SignalFxClient against a mock API server

use serde_json::json;
use sfx2tf_api::{ApiError, ChartKind, DetectorRecord, SignalFxApi, SignalFxClient};
use sfx2tf_http::HttpConfig;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client(server: &MockServer) -> SignalFxClient {
    let config = HttpConfig::new()
        .with_retry_count(1)
        .with_retry_delay(Duration::from_millis(5));
    SignalFxClient::new(&server.uri(), "secret-token", config).unwrap()
}

#[tokio::test]
async fn test_chart_fetch_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/chart/C1"))
        .and(header("X-SF-TOKEN", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "C1",
            "name": "Notes",
            "options": {"type": "Text", "markdown": "# hi"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chart = client(&server).chart("C1").await.unwrap();
    assert_eq!(chart.kind(), Some(ChartKind::Text));
    assert_eq!(chart.options.markdown.as_deref(), Some("# hi"));
}

#[tokio::test]
async fn test_dashboard_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/dashboard/D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .mount(&server)
        .await;

    let err = client(&server).dashboard("D1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { resource: "dashboard", .. }));
}

#[tokio::test]
async fn test_current_detector() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/detector/X1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "X1",
            "name": "cpu",
            "programText": "detect(when(A > 1)).publish('cpu')",
            "rules": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/detector/X1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let record = client(&server).detector("X1").await.unwrap();
    assert!(matches!(record, DetectorRecord::Current(ref d) if d.name == "cpu"));
}

#[tokio::test]
async fn test_not_found_falls_back_to_legacy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/detector/L1"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad id"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/detector/L1"))
        .and(header("X-SF-TOKEN", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sf_id": "L1",
            "sf_detector": "legacy cpu",
            "sf_jobMaxDelay": 0,
            "sf_rules": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client(&server).detector("L1").await.unwrap();
    assert_eq!(record.id(), "L1");
    assert!(matches!(record, DetectorRecord::Legacy(ref d) if d.name == "legacy cpu"));
}

#[tokio::test]
async fn test_server_error_is_not_read_as_legacy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/detector/X2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/detector/X2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sf_id": "X2"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).detector("X2").await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_legacy_body_must_look_legacy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/detector/Q"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/detector/Q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let err = client(&server).detector("Q").await.unwrap_err();
    assert!(matches!(err, ApiError::UnrecognizedSchema { ref id } if id == "Q"));
}
