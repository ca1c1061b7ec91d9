//! Status route tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bookai_service::config::{BookaiConfig, GoogleConfig, ModelConfig};
use bookai_service::services::providers::mock::{MockImageProvider, MockTextProvider};
use bookai_service::services::providers::{ImageProvider, TextProvider};
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

fn test_state(
    text_provider: Option<Arc<dyn TextProvider>>,
    image_provider: Option<Arc<dyn ImageProvider>>,
) -> AppState {
    AppState {
        config: test_config(),
        text_provider,
        image_provider,
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

#[tokio::test]
async fn status_is_ok_when_client_usable() {
    let state = test_state(
        Some(Arc::new(MockTextProvider::with_reply("ok")) as Arc<dyn TextProvider>),
        Some(Arc::new(MockImageProvider::with_payload("aGk=")) as Arc<dyn ImageProvider>),
    );

    let response = app_router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["status"].as_str().unwrap().contains("ativa"));
    assert!(body["message"].as_str().unwrap().contains("/generate_ebook"));
    assert!(!body["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn status_is_503_when_client_unusable() {
    let state = test_state(None, None);

    let response = app_router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("GEMINI_API_KEY"));
}
