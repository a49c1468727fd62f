//! Image filter route handlers.
//!
//! GET renders the upload form; POST takes a multipart submission with a
//! `filter_type` field and a `users_image` file, stores the upload, applies
//! the filter, and re-renders the form with the derived asset.

use askama::Template;
use axum::extract::{Multipart, State};
use axum::response::Html;

use crate::error::Error;
use crate::filters::FilterKind;

use super::error::AppError;
use super::templates::ImageFilterTemplate;
use super::AppContext;

fn filter_names() -> Vec<&'static str> {
    FilterKind::ALL.iter().map(FilterKind::as_str).collect()
}

/// GET /image_filter
pub async fn image_filter_form() -> Result<Html<String>, AppError> {
    render(None)
}

/// POST /image_filter
pub async fn image_filter_submit(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut filter_type: Option<String> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("filter_type") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| Error::validation(format!("Unreadable filter field: {e}")))?;
                filter_type = Some(value);
            }
            Some("users_image") => {
                let file_name = field.file_name().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::validation(format!("Unreadable upload: {e}")))?;
                if let Some(name) = file_name {
                    if !name.is_empty() && !data.is_empty() {
                        upload = Some((name, data.to_vec()));
                    }
                }
            }
            _ => {}
        }
    }

    // No file attached: return the form unmodified rather than failing.
    let Some((file_name, data)) = upload else {
        return render(None);
    };

    let kind: FilterKind = filter_type.as_deref().unwrap_or_default().parse()?;
    let filtered = ctx.images.filter_upload(&file_name, &data, kind)?;

    render(Some(format!("/static/images/{}", filtered.file_name)))
}

fn render(image_url: Option<String>) -> Result<Html<String>, AppError> {
    let html = ImageFilterTemplate {
        filters: filter_names(),
        image_url,
    }
    .render()
    .map_err(Error::from)?;
    Ok(Html(html))
}
