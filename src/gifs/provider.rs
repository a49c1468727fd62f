//! Trait definition and types for GIF search providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single GIF returned from a provider search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gif {
    /// Fully-qualified URL of the full-size GIF.
    pub url: String,
    /// URL of a smaller preview rendition, if the provider has one.
    pub preview_url: Option<String>,
    /// Human-readable title, if the provider has one.
    pub title: Option<String>,
}

/// Async trait for GIF search backends.
///
/// Each provider wraps a single external API (here: Tenor) and exposes a
/// uniform search interface. Providers are expected to be wrapped in an
/// `Arc` so they can be shared across requests.
#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"tenor"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the provider has been configured with valid
    /// credentials and is ready to serve requests.
    fn is_available(&self) -> bool;

    /// Search for GIFs matching `query`, returning at most `limit` results.
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Gif>>;
}
