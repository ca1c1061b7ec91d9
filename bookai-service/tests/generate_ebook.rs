//! Ebook generation route tests.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bookai_service::config::{BookaiConfig, GoogleConfig, ModelConfig};
use bookai_service::services::prompt::{COVER_PROMPT_MARKER, SECTION_SEPARATOR};
use bookai_service::services::providers::TextProvider;
use bookai_service::services::providers::mock::MockTextProvider;
use bookai_service::startup::{AppState, app_router};
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> BookaiConfig {
    BookaiConfig {
        common: service_core::config::Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        models: ModelConfig {
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-3.0-generate-002".to_string(),
        },
        google: GoogleConfig { api_key: None },
    }
}

fn test_state(text_provider: Option<Arc<dyn TextProvider>>) -> AppState {
    AppState {
        config: test_config(),
        text_provider,
        image_provider: None,
    }
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

#[tokio::test]
async fn echoes_reply_and_extracts_cover_prompt() {
    let reply = "[CAPA_PROMPT]: Um castelo ao entardecer\n---\n**PÁGINA 1:** era uma vez";
    let provider = Arc::new(MockTextProvider::with_reply(reply));
    let state = test_state(Some(provider.clone() as Arc<dyn TextProvider>));

    let response = app_router(state)
        .oneshot(post_json(
            "/generate_ebook",
            r#"{"title": "T", "author": "A", "genre": "G", "synopsis": "S", "pages": 3}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["ai_response_text"], reply);
    assert_eq!(body["cover_prompt"], "Um castelo ao entardecer");

    // The instruction string embeds every supplied field and both structural
    // tokens.
    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0];
    assert!(prompt.contains("**T**"));
    assert!(prompt.contains("**A**"));
    assert!(prompt.contains("deve ser G"));
    assert!(prompt.contains("**SINOPSE:** S"));
    assert!(prompt.contains("3 páginas"));
    assert!(prompt.contains(COVER_PROMPT_MARKER));
    assert!(prompt.contains(SECTION_SEPARATOR));
}

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let provider = Arc::new(MockTextProvider::with_reply("texto"));
    let state = test_state(Some(provider.clone() as Arc<dyn TextProvider>));

    let response = app_router(state)
        .oneshot(post_json("/generate_ebook", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let prompt = provider.calls().remove(0);
    assert!(prompt.contains("5 páginas"));
    assert!(prompt.contains("Título Desconhecido"));
    assert!(prompt.contains("Autor Desconhecido"));
    assert!(prompt.contains("deve ser Geral"));
    assert!(prompt.contains("Nenhuma sinopse fornecida."));
}

#[tokio::test]
async fn unstructured_reply_yields_empty_cover_prompt() {
    let provider = Arc::new(MockTextProvider::with_reply("resposta sem marcador"));
    let state = test_state(Some(provider as Arc<dyn TextProvider>));

    let response = app_router(state)
        .oneshot(post_json("/generate_ebook", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["cover_prompt"], "");
}

#[tokio::test]
async fn unusable_client_is_500_not_a_crash() {
    let response = app_router(test_state(None))
        .oneshot(post_json("/generate_ebook", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_is_500_with_diagnostic() {
    let provider = Arc::new(MockTextProvider::failing("quota excedida"));
    let state = test_state(Some(provider as Arc<dyn TextProvider>));

    let response = app_router(state)
        .oneshot(post_json("/generate_ebook", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("quota excedida"));
}
