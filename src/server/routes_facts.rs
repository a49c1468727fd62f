//! Animal facts route handler.

use askama::Template;
use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::error::Error;
use crate::facts;

use super::error::AppError;
use super::templates::AnimalFactsTemplate;

#[derive(Debug, Deserialize)]
pub struct AnimalQuery {
    pub animal: Option<String>,
}

/// GET /animal_facts
///
/// Renders the chooser; with `?animal=<name>` also renders the matching
/// fact. An animal outside the table simply renders no fact.
pub async fn animal_facts(Query(query): Query<AnimalQuery>) -> Result<Html<String>, AppError> {
    let chosen_animal = query.animal.filter(|animal| !animal.is_empty());
    let fact = chosen_animal.as_deref().and_then(facts::fact_for);

    let html = AnimalFactsTemplate {
        animals: facts::animals().collect(),
        chosen_animal,
        fact,
    }
    .render()
    .map_err(Error::from)?;

    Ok(Html(html))
}
