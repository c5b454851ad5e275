//! Gemini provider tests against a stubbed upstream API.

use mindmesh_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use mindmesh_service::services::providers::{ProviderError, TextProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.0-flash";

fn provider_for(server: &MockServer) -> GeminiTextProvider {
    let config = GeminiConfig::new("test-api-key", MODEL).with_api_base(server.uri());
    GeminiTextProvider::new(config)
}

fn generate_path() -> String {
    format!("/models/{}:generateContent", MODEL)
}

#[tokio::test]
async fn generate_extracts_the_first_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "{\"categories\":[],\"connections\":[]}"}]
                },
                "finishReason": "STOP"
            }]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let text = provider
        .generate("organize this")
        .await
        .expect("generate failed");

    assert_eq!(text, "{\"categories\":[],\"connections\":[]}");
}

#[tokio::test]
async fn generate_sends_the_prompt_as_a_user_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "organize this"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{}"}]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    provider
        .generate("organize this")
        .await
        .expect("generate failed");
}

#[tokio::test]
async fn generate_maps_429_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.generate("organize this").await.unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn generate_reports_upstream_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.generate("organize this").await.unwrap_err();

    assert!(matches!(err, ProviderError::ApiError(_)));
}

#[tokio::test]
async fn generate_flags_a_response_without_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.generate("organize this").await.unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn health_check_lists_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    provider.health_check().await.expect("health check failed");
}

#[tokio::test]
async fn health_check_rejects_an_empty_api_key() {
    let server = MockServer::start().await;
    let config = GeminiConfig::new("", MODEL).with_api_base(server.uri());
    let provider = GeminiTextProvider::new(config);

    let err = provider.health_check().await.unwrap_err();

    assert!(matches!(err, ProviderError::NotConfigured(_)));
}
