//! Application startup and lifecycle management.

use crate::config::BookaiConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::imagen::{ImagenConfig, ImagenImageProvider};
use crate::services::providers::{ImageProvider, TextProvider};
use axum::{
    Router,
    routing::{get, post},
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Providers are built once at startup and only read afterwards; `None` is
/// the explicit "client unusable" marker every handler checks before use.
#[derive(Clone)]
pub struct AppState {
    pub config: BookaiConfig,
    pub text_provider: Option<Arc<dyn TextProvider>>,
    pub image_provider: Option<Arc<dyn ImageProvider>>,
}

/// Build the service router over the given state.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/generate_ebook", post(handlers::generate_ebook))
        .route("/generate_cover", post(handlers::generate_cover))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// A missing credential is not a build failure: the service starts with
    /// unusable providers and every route degrades per its contract.
    pub async fn build(config: BookaiConfig) -> Result<Self, AppError> {
        let (text_provider, image_provider) = match config.google.api_key.clone() {
            Some(api_key) => {
                let text: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(GeminiConfig {
                    api_key: api_key.clone(),
                    model: config.models.text_model.clone(),
                }));
                let image: Arc<dyn ImageProvider> =
                    Arc::new(ImagenImageProvider::new(ImagenConfig {
                        api_key,
                        model: config.models.image_model.clone(),
                    }));

                tracing::info!(
                    text_model = %config.models.text_model,
                    image_model = %config.models.image_model,
                    "Initialized Gemini providers"
                );

                (Some(text), Some(image))
            }
            None => {
                tracing::error!(
                    "GEMINI_API_KEY is not set; generation routes will run degraded"
                );
                (None, None)
            }
        };

        let state = AppState {
            config: config.clone(),
            text_provider,
            image_provider,
        };

        let app = app_router(state);

        let addr = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
