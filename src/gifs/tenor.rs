//! Tenor GIF search provider.
//!
//! Implements [`GifProvider`] by querying the Tenor v1 REST API.
//!
//! Features:
//! - Token-bucket rate limiting at 4 requests / second via [`governor`].
//! - Automatic retry on HTTP 429 with `Retry-After` header support (max 3 retries).
//! - 30-second request timeout.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::provider::{Gif, GifProvider};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;

// ---------------------------------------------------------------------------
// Tenor API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TenorSearchResponse {
    results: Vec<TenorResult>,
}

#[derive(Debug, Deserialize)]
struct TenorResult {
    title: Option<String>,
    /// Each entry maps a format name ("gif", "tinygif", ...) to its rendition.
    #[serde(default)]
    media: Vec<HashMap<String, TenorMedia>>,
}

#[derive(Debug, Deserialize)]
struct TenorMedia {
    url: String,
    preview: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// Tenor GIF search provider.
///
/// Wraps the Tenor v1 search endpoint with built-in rate limiting and retry
/// logic.
pub struct TenorClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    rate_limiter: RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl TenorClient {
    /// Create a new Tenor client with the given API key.
    ///
    /// `base_url` is the API root without a trailing slash, normally
    /// `https://api.tenor.com/v1`. Rate limiting is configured at 4 requests
    /// per second.
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_second(NonZeroU32::new(4).unwrap());
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            api_key,
            base_url,
            rate_limiter,
        })
    }

    /// Execute a GET request with rate limiting and 429-retry logic.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let mut retries = 0u32;
        loop {
            self.rate_limiter.until_ready().await;

            let resp = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(|e| Error::upstream("tenor", format!("request failed: {e}")))?;

            if resp.status() == StatusCode::TOO_MANY_REQUESTS && retries < MAX_RETRIES {
                retries += 1;
                let wait = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1);
                warn!(
                    retry = retries,
                    wait_secs = wait,
                    "Tenor returned 429, backing off"
                );
                tokio::time::sleep(Duration::from_secs(wait)).await;
                continue;
            }

            if !resp.status().is_success() {
                return Err(Error::upstream(
                    "tenor",
                    format!("HTTP {} from {url}", resp.status()),
                ));
            }

            return Ok(resp);
        }
    }
}

#[async_trait]
impl GifProvider for TenorClient {
    fn name(&self) -> &'static str {
        "tenor"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Gif>> {
        let url = format!("{}/search", self.base_url);
        let params = [
            ("q", query.to_string()),
            ("key", self.api_key.clone()),
            ("limit", limit.to_string()),
        ];

        let resp = self.get(&url, &params).await?;
        let body: TenorSearchResponse = resp
            .json()
            .await
            .map_err(|e| Error::upstream("tenor", format!("bad response body: {e}")))?;

        let gifs: Vec<Gif> = body
            .results
            .into_iter()
            .filter_map(|result| {
                // Prefer the full-size "gif" rendition, fall back to
                // whatever format the result carries.
                let media = result
                    .media
                    .iter()
                    .find_map(|formats| formats.get("gif"))
                    .or_else(|| {
                        result
                            .media
                            .iter()
                            .find_map(|formats| formats.values().next())
                    })?;
                Some(Gif {
                    url: media.url.clone(),
                    preview_url: media.preview.clone(),
                    title: result.title.clone(),
                })
            })
            .collect();

        debug!(query, limit, count = gifs.len(), "Tenor search complete");
        Ok(gifs)
    }
}
