//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates a temp image directory, default
//! config, and full [`AppContext`]. The [`with_server`] constructors start
//! Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::TempDir;

use filterbox::config::Config;
use filterbox::gifs::GifProvider;
use filterbox::images::{ImageService, ImageStore};
use filterbox::server::{create_router, AppContext};

/// Test harness wrapping a fully-constructed [`AppContext`] backed by a
/// temporary image directory.
pub struct TestHarness {
    pub ctx: AppContext,
    pub images_dir: TempDir,
}

impl TestHarness {
    /// Create a new harness with default configuration and no GIF provider.
    pub fn new() -> Self {
        Self::with_gifs(None)
    }

    /// Create a new harness with the given GIF provider.
    pub fn with_gifs(gifs: Option<Arc<dyn GifProvider>>) -> Self {
        let images_dir = tempfile::tempdir().expect("failed to create temp dir");

        let mut config = Config::default();
        config.images.dir = images_dir.path().to_path_buf();

        let images = Arc::new(ImageService::new(ImageStore::new(
            images_dir.path().to_path_buf(),
        )));

        let ctx = AppContext {
            config: Arc::new(config),
            images,
            gifs,
        };

        Self { ctx, images_dir }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::spawn(Self::new()).await
    }

    /// Start an Axum server with a GIF provider on a random port.
    pub async fn with_server_gifs(gifs: Arc<dyn GifProvider>) -> (Self, SocketAddr) {
        Self::spawn(Self::with_gifs(Some(gifs))).await
    }

    async fn spawn(harness: Self) -> (Self, SocketAddr) {
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}
