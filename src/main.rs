//! OncoScope - Breast Cancer Prediction Form
//!
//! Local single-page app over a pre-trained scaler + classifier pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ONCOSCOPE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌────────────────────┐ │
//! │  │  Form     │──▶│  Prediction  │──▶│  Render            │ │
//! │  │  (Axum)   │   │  Engine      │   │  (HTML + SVG)      │ │
//! │  └───────────┘   └──────┬───────┘   └────────────────────┘ │
//! │                         ▼                                   │
//! │                ┌─────────────────┐                          │
//! │                │  ModelHandle    │  loaded once, read-only  │
//! │                │  scaler + clf   │                          │
//! │                └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod model;
mod prediction;
mod render;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, LogFormat};
use model::SharedModel;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    init_tracing(config.log_format);

    tracing::info!("OncoScope starting...");

    // Load the pipeline; nothing is served without it
    let model = model::load_pipeline(&config.model_path)
        .with_context(|| format!("failed to load model artifact {}", config.model_path.display()))?;

    // Build application state
    let state = AppState {
        model: Arc::new(model),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "oncoscope=debug,tower_http=debug".into());
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: SharedModel,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form::index))
        .route("/predict", post(handlers::form::predict))
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
