//! Compliments route handlers.

use askama::Template;
use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::compliments;
use crate::error::Error;

use super::error::AppError;
use super::templates::{ComplimentsFormTemplate, ComplimentsResultsTemplate};

/// Query parameters for the results page. Everything is optional; absent or
/// garbled values fall back to defaults rather than failing the request.
#[derive(Debug, Deserialize)]
pub struct ComplimentsQuery {
    pub users_name: Option<String>,
    pub wants_compliments: Option<String>,
    pub num_compliments: Option<String>,
}

/// GET /compliments
pub async fn compliments_form() -> Result<Html<String>, AppError> {
    let html = ComplimentsFormTemplate.render().map_err(Error::from)?;
    Ok(Html(html))
}

/// GET /compliments_results
pub async fn compliments_results(
    Query(query): Query<ComplimentsQuery>,
) -> Result<Html<String>, AppError> {
    let user_name = query
        .users_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "User".to_string());

    let show_compliments = query.wants_compliments.as_deref() == Some("yes");

    let count = query
        .num_compliments
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(1);

    let compliments = if show_compliments {
        compliments::sample(count)
    } else {
        Vec::new()
    };

    let html = ComplimentsResultsTemplate {
        user_name,
        show_compliments,
        compliments,
    }
    .render()
    .map_err(Error::from)?;

    Ok(Html(html))
}
