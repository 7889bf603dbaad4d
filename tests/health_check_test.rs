//! Status endpoint integration tests.

use serde_json::json;
use test_harness::TestEnv;

#[tokio::test]
async fn root_reports_service_status() {
    let env = TestEnv::new().await;

    let response =
        env.client.get(env.url("/")).send().await.expect("Request should complete");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Response should be valid JSON");
    assert_eq!(body["status"], json!("ok"));
    assert!(body["timestamp"].is_string());
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["version"].is_string());

    let endpoints = body["endpoints"].as_array().expect("endpoints should be a list");
    assert!(endpoints.contains(&json!("POST /webhook")));
    assert!(endpoints.contains(&json!("GET /")));
}
