//! Homepage route handler.

use askama::Template;
use axum::response::Html;

use crate::error::Error;

use super::error::AppError;
use super::templates::HomeTemplate;

/// GET /
pub async fn homepage() -> Result<Html<String>, AppError> {
    let html = HomeTemplate.render().map_err(Error::from)?;
    Ok(Html(html))
}
