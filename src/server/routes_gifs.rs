//! GIF search route handlers.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::error::Error;
use crate::gifs::Gif;

use super::error::AppError;
use super::templates::GifSearchTemplate;
use super::AppContext;

/// Tenor caps `limit` at 50 per request.
const MAX_RESULTS: u8 = 50;

#[derive(Debug, Deserialize)]
pub struct GifSearchForm {
    pub search_query: String,
    pub quantity: Option<String>,
}

/// GET /gif_search
pub async fn gif_search_form(State(ctx): State<AppContext>) -> Result<Html<String>, AppError> {
    render(&ctx, false, Vec::new())
}

/// POST /gif_search
pub async fn gif_search_submit(
    State(ctx): State<AppContext>,
    Form(form): Form<GifSearchForm>,
) -> Result<Html<String>, AppError> {
    let Some(ref provider) = ctx.gifs else {
        // No API key configured; the form explains how to enable search.
        return render(&ctx, false, Vec::new());
    };

    let limit = form
        .quantity
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u8>().ok())
        .unwrap_or(ctx.config.tenor.default_limit)
        .clamp(1, MAX_RESULTS);

    let gifs = provider.search(form.search_query.trim(), limit).await?;

    render(&ctx, true, gifs)
}

fn render(ctx: &AppContext, searched: bool, gifs: Vec<Gif>) -> Result<Html<String>, AppError> {
    let html = GifSearchTemplate {
        provider_available: ctx.gifs.is_some(),
        searched,
        gifs,
    }
    .render()
    .map_err(Error::from)?;
    Ok(Html(html))
}
