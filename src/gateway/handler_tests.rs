//! Tests for the gateway router and handlers.

use axum::{Router, body::Body, http::Request, http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::constants::FAQROUTE_SOURCE_HEADER;
use crate::corpus::{Corpus, KnowledgeEntry};
use crate::gateway::create_router_with_state;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::ChatReply;
use crate::gateway::state::HandlerState;
use crate::matching::{AnswerSource, Matcher};
use crate::provider::{FallbackProvider, MockProvider};

fn test_corpus() -> Corpus {
    Corpus::new(vec![
        KnowledgeEntry::new(
            "library-hours",
            "What are library hours?",
            "The library opens 8am to 10pm.",
        )
        .with_keywords(["library hours"]),
        KnowledgeEntry::new(
            "parking",
            "Where can visitors park?",
            "Visitor parking is in Lot C.",
        )
        .with_keywords(["visitor parking", "where to park"]),
    ])
    .expect("valid test corpus")
}

/// Builds a router plus a handle on the provider so calls can be counted.
fn setup_router_with(corpus: Corpus, provider: Arc<MockProvider>) -> Router {
    let state = HandlerState::new(
        Arc::new(corpus),
        Matcher::default(),
        provider as Arc<dyn FallbackProvider>,
    );
    create_router_with_state(state)
}

fn setup_router() -> (Router, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider::new());
    (setup_router_with(test_corpus(), provider.clone()), provider)
}

async fn post_chat(router: &Router, body: Body) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn post_message(router: &Router, message: &str) -> axum::response::Response {
    let body = serde_json::json!({ "message": message }).to_string();
    post_chat(router, Body::from(body)).await
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn source_header(response: &axum::response::Response) -> Option<&str> {
    response
        .headers()
        .get(FAQROUTE_SOURCE_HEADER)
        .and_then(|v| v.to_str().ok())
}

mod extract_message_tests {
    use super::*;
    use crate::gateway::handler::extract_message;

    #[test]
    fn test_accepts_string_message() {
        let req = serde_json::json!({"message": "library hours?"});
        assert_eq!(extract_message(&req).unwrap(), "library hours?");
    }

    #[test]
    fn test_rejects_missing_message() {
        let req = serde_json::json!({"text": "hi"});
        match extract_message(&req).unwrap_err() {
            GatewayError::InvalidRequest(msg) => assert!(msg.contains("`message`")),
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_string_message() {
        for req in [
            serde_json::json!({"message": 42}),
            serde_json::json!({"message": null}),
            serde_json::json!({"message": ["a"]}),
            serde_json::json!("message"),
        ] {
            assert!(extract_message(&req).is_err(), "accepted {req}");
        }
    }

    #[test]
    fn test_rejects_empty_message() {
        let req = serde_json::json!({"message": ""});
        assert!(extract_message(&req).is_err());
    }
}

mod payload_tests {
    use super::*;
    use crate::matching::find_best_match;

    #[test]
    fn test_match_reply_carries_answer_and_provenance() {
        let corpus = test_corpus();
        let result = find_best_match("library hours", &corpus).unwrap();
        let reply = ChatReply::from_match(&result);

        assert_eq!(reply.source, AnswerSource::KnowledgeBase);
        assert_eq!(reply.matched_id.as_deref(), Some("library-hours"));
        assert_eq!(reply.reply, "The library opens 8am to 10pm.");
        assert_eq!(reply.score, Some(result.score));
    }

    #[test]
    fn test_generative_reply_omits_match_fields() {
        let reply = ChatReply::generative("hello".to_string());
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json, serde_json::json!({"source": "generative", "reply": "hello"}));
    }
}

mod error_tests {
    use super::*;
    use crate::provider::ProviderError;

    #[tokio::test]
    async fn test_invalid_request_is_400() {
        let response = GatewayError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(source_header(&response), Some("invalid_request"));

        let json = body_json(response).await;
        assert_eq!(json["code"], 400);
        assert_eq!(json["error"], "invalid request: bad");
    }

    #[test]
    fn test_missing_credentials_maps_to_not_configured() {
        let err: GatewayError = ProviderError::MissingCredentials {
            env_var: "GEMINI_API_KEY".to_string(),
        }
        .into();

        assert!(matches!(err, GatewayError::ProviderNotConfigured(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_failure_maps_to_bad_gateway_without_details() {
        let err: GatewayError = ProviderError::Upstream("secret internals".to_string()).into();

        assert!(!err.to_string().contains("secret internals"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}

mod chat_handler_tests {
    use super::*;

    #[tokio::test]
    async fn test_knowledge_base_hit() {
        let (router, provider) = setup_router();

        let response = post_message(&router, "What are the library hours today?").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source_header(&response), Some("KNOWLEDGE_BASE"));

        let json = body_json(response).await;
        assert_eq!(json["source"], "knowledge_base");
        assert_eq!(json["matched_id"], "library-hours");
        assert_eq!(json["reply"], "The library opens 8am to 10pm.");
        assert!(json["score"].as_u64().unwrap() >= 3);

        assert_eq!(provider.calls(), 0, "provider must not be called on a hit");
    }

    #[tokio::test]
    async fn test_miss_falls_back_to_provider() {
        let (router, provider) = setup_router();

        let response = post_message(&router, "where is the gym").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source_header(&response), Some("GENERATIVE"));

        let json = body_json(response).await;
        assert_eq!(json["source"], "generative");
        assert_eq!(json["reply"], "Mock response for: where is the gym");
        assert!(json.get("matched_id").is_none());
        assert!(json.get("score").is_none());

        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_symbol_only_message_falls_back() {
        let (router, provider) = setup_router();

        let response = post_message(&router, "???").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["source"], "generative");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_corpus_always_falls_back() {
        let provider = Arc::new(MockProvider::new());
        let router = setup_router_with(Corpus::empty(), provider.clone());

        let response = post_message(&router, "library hours").await;

        assert_eq!(body_json(response).await["source"], "generative");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_message_is_bad_request() {
        let (router, provider) = setup_router();

        let response = post_chat(&router, Body::from(r#"{"msg":"hi"}"#)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(source_header(&response), Some("invalid_request"));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (router, _provider) = setup_router();

        let response = post_chat(&router, Body::from("{not json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], 400);
    }

    #[tokio::test]
    async fn test_provider_failure_is_bad_gateway() {
        let provider = Arc::new(MockProvider::failing());
        let router = setup_router_with(test_corpus(), provider.clone());

        let response = post_message(&router, "where is the gym").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(source_header(&response), Some("provider_error"));
    }

    #[tokio::test]
    async fn test_hit_is_served_even_if_provider_is_broken() {
        let provider = Arc::new(MockProvider::failing());
        let router = setup_router_with(test_corpus(), provider.clone());

        let response = post_message(&router, "is there visitor parking").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["matched_id"], "parking");
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let (router, _provider) = setup_router();

        let request = Request::builder()
            .method("GET")
            .uri("/v1/chat")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(source_header(&response), Some("method_not_allowed"));
        assert_eq!(
            response.headers().get("allow").and_then(|v| v.to_str().ok()),
            Some("POST")
        );

        let json = body_json(response).await;
        assert_eq!(json["error"], "Use POST");
        assert_eq!(json["code"], 405);
    }

    #[tokio::test]
    async fn test_put_is_method_not_allowed_without_calling_provider() {
        let (router, provider) = setup_router();

        let request = Request::builder()
            .method("PUT")
            .uri("/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message":"library hours"}"#))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "Use POST");
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let (router, _provider) = setup_router();

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/v1/chat")
            .header("origin", "https://example.edu")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_cors_header_on_simple_request() {
        let (router, _provider) = setup_router();

        let request = Request::builder()
            .method("POST")
            .uri("/v1/chat")
            .header("origin", "https://example.edu")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message":"library hours"}"#))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("access-control-allow-origin"));
    }
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_healthz() {
        let (router, _provider) = setup_router();

        let request = Request::builder()
            .method("GET")
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source_header(&response), Some("healthy"));
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_ready_reports_corpus() {
        let (router, _provider) = setup_router();
        let expected_fingerprint =
            crate::hashing::format_fingerprint(test_corpus().fingerprint());

        let request = Request::builder()
            .method("GET")
            .uri("/ready")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["corpus"]["entries"], 2);
        assert_eq!(json["corpus"]["fingerprint"], expected_fingerprint);
        assert_eq!(json["provider"], "mock");
    }

    #[tokio::test]
    async fn test_ready_unavailable_with_empty_corpus() {
        let router = setup_router_with(Corpus::empty(), Arc::new(MockProvider::new()));

        let request = Request::builder()
            .method("GET")
            .uri("/ready")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(source_header(&response), Some("not_ready"));
        assert_eq!(body_json(response).await["corpus"]["entries"], 0);
    }
}
