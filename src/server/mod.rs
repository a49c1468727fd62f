//! HTTP server: application context, router, and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::gifs::{GifProvider, TenorClient};
use crate::images::{ImageService, ImageStore};

pub mod error;
pub mod routes_compliments;
pub mod routes_facts;
pub mod routes_gifs;
pub mod routes_home;
pub mod routes_images;
pub mod templates;

/// Shared application context.
///
/// Cheaply cloneable; handlers receive it via Axum state.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Upload storage + filter application.
    pub images: Arc<ImageService>,
    /// GIF search provider; `None` when no API key is configured.
    pub gifs: Option<Arc<dyn GifProvider>>,
}

/// Create the Axum router with all routes.
pub fn create_router(ctx: AppContext) -> Router {
    let images_dir = ctx.images.store().base_dir().to_path_buf();

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(routes_home::homepage))
        .route("/compliments", get(routes_compliments::compliments_form))
        .route(
            "/compliments_results",
            get(routes_compliments::compliments_results),
        )
        .route("/animal_facts", get(routes_facts::animal_facts))
        .route(
            "/image_filter",
            get(routes_images::image_filter_form).post(routes_images::image_filter_submit),
        )
        .route(
            "/gif_search",
            get(routes_gifs::gif_search_form).post(routes_gifs::gif_search_submit),
        )
        .nest_service("/static/images", ServeDir::new(images_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Build the application context from config.
pub fn build_context(config: Config) -> Result<AppContext> {
    let store = ImageStore::new(config.images.dir.clone());
    let images = Arc::new(ImageService::new(store));

    let gifs: Option<Arc<dyn GifProvider>> = match config.tenor.api_key {
        Some(ref key) => {
            let client = TenorClient::new(key.clone(), config.tenor.base_url.clone())
                .context("Failed to build Tenor client")?;
            Some(Arc::new(client))
        }
        None => {
            tracing::info!("No Tenor API key configured; GIF search disabled");
            None
        }
    };

    Ok(AppContext {
        config: Arc::new(config),
        images,
        gifs,
    })
}

/// Start the HTTP server.
pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let ctx = build_context(config)?;
    let app = create_router(ctx);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
