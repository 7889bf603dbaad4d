//! Handshake behavior integration tests.
//!
//! The platform proves endpoint ownership by sending a challenge token and
//! expecting it back verbatim.

use serde_json::json;
use test_harness::TestEnv;

#[tokio::test]
async fn challenge_echoed_verbatim() {
    let env = TestEnv::new().await;

    let response = env
        .post_webhook(&json!({ "type": "url_verification", "challenge": "ddda8e05-dc03-4f0c" }))
        .await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Response should be valid JSON");
    assert_eq!(body, json!({ "challenge": "ddda8e05-dc03-4f0c" }));
}

#[tokio::test]
async fn non_string_challenge_echoed_verbatim() {
    let env = TestEnv::new().await;

    let response =
        env.post_webhook(&json!({ "type": "url_verification", "challenge": 12345 })).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Response should be valid JSON");
    assert_eq!(body, json!({ "challenge": 12345 }));
}

#[tokio::test]
async fn absent_challenge_echoed_as_null() {
    let env = TestEnv::new().await;

    let response = env.post_webhook(&json!({ "type": "url_verification" })).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Response should be valid JSON");
    assert_eq!(body, json!({ "challenge": null }));
}

#[tokio::test]
async fn handshake_never_forwarded() {
    let env = TestEnv::new().await;
    env.downstream.respond_ok().await;

    // A body carrying both probes is answered as a handshake.
    let response = env
        .post_webhook(&json!({
            "type": "url_verification",
            "challenge": "tok",
            "header": { "event_type": "im.message.receive_v1" }
        }))
        .await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Response should be valid JSON");
    assert_eq!(body, json!({ "challenge": "tok" }));

    assert_eq!(env.downstream.request_count().await, 0, "handshake must not reach downstream");
}
