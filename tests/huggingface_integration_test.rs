//! Wiremock integration tests for HuggingFaceClient.
//!
//! These tests verify correct HTTP interaction and error handling using mocked responses.

use claimcheck::providers::HuggingFaceClient;
use claimcheck::{ClaimCheckError, Verdict};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "TanishqRM3/BERT-fake-news-detector";

/// The hosted pipeline wraps single-input results in an extra array.
#[tokio::test]
async fn test_classify_true() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .and(header("Authorization", "Bearer test_key"))
        .and(body_json(serde_json::json!({"inputs": "The sky is blue."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[
            {"label": "True", "score": 0.93},
            {"label": "False", "score": 0.07}
        ]])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri()).unwrap();
    let result = client.classify("The sky is blue.").await;

    let classification = result.expect("classify should succeed");
    assert_eq!(classification.label, Verdict::True);
    assert_eq!(classification.raw_label, "True");
    assert_eq!(classification.model, MODEL);
    assert!((classification.confidence - 0.93).abs() < 0.001);
}

/// The highest score wins even when the service does not sort.
#[tokio::test]
async fn test_classify_false_unsorted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"label": "LABEL_1", "score": 0.2},
            {"label": "LABEL_0", "score": 0.8}
        ])))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri()).unwrap();
    let classification = client.classify("Aliens built the pyramids.").await.unwrap();

    assert_eq!(classification.label, Verdict::False);
    assert_eq!(classification.raw_label, "LABEL_0");
    assert!((classification.confidence - 0.8).abs() < 0.001);
}

#[tokio::test]
async fn test_custom_model_and_labels() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/org/liar-six-way"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([[{"label": "pants-fire", "score": 0.6}]])),
        )
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri())
        .unwrap()
        .model("org/liar-six-way")
        .false_labels(vec!["pants-fire".to_string(), "false".to_string()]);
    let classification = client.classify("claim").await.unwrap();

    assert_eq!(classification.label, Verdict::False);
    assert_eq!(classification.model, "org/liar-six-way");
}

#[tokio::test]
async fn test_empty_scores_is_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri()).unwrap();
    let result = client.classify("claim").await;

    assert!(
        matches!(result, Err(ClaimCheckError::EmptyResponse)),
        "expected EmptyResponse, got {:?}",
        result
    );
}

/// Test 401 Unauthorized returns AuthenticationFailed error.
#[tokio::test]
async fn test_error_401_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("bad_key", mock_server.uri()).unwrap();
    let result = client.classify("hello").await;

    assert!(
        matches!(result, Err(ClaimCheckError::AuthenticationFailed)),
        "expected AuthenticationFailed, got {:?}",
        result
    );
}

/// Test 404 Not Found returns ModelNotFound error.
#[tokio::test]
async fn test_error_404_model_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/nonexistent/model"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri())
        .unwrap()
        .model("nonexistent/model");
    let result = client.classify("hello").await;

    match result {
        Err(ClaimCheckError::ModelNotFound(m)) => assert_eq!(m, "nonexistent/model"),
        other => panic!("expected ModelNotFound, got {:?}", other),
    }
}

/// Test 429 Too Many Requests returns RateLimited error with retry-after.
#[tokio::test]
async fn test_error_429_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri()).unwrap();
    let result = client.classify("hello").await;

    match result {
        Err(ClaimCheckError::RateLimited { retry_after }) => {
            assert_eq!(retry_after, Some(std::time::Duration::from_secs(30)));
        }
        other => panic!("expected RateLimited, got {:?}", other),
    }
}

/// Test 503 Service Unavailable (model loading) returns Api error.
#[tokio::test]
async fn test_error_503_model_loading() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_base_url("test_key", mock_server.uri()).unwrap();
    let result = client.classify("hello").await;

    match result {
        Err(ClaimCheckError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("loading"));
        }
        other => panic!("expected Api {{ status: 503 }}, got {:?}", other),
    }
}
