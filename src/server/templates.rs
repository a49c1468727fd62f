//! Askama page templates.
//!
//! One struct per page, compiled from the `templates/` directory. Handlers
//! fill these and render to `Html<String>`.

use askama::Template;

use crate::gifs::Gif;

/// Homepage with links to each demo.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Form asking who wants compliments, and how many.
#[derive(Template)]
#[template(path = "compliments_form.html")]
pub struct ComplimentsFormTemplate;

/// Compliment results for one submission.
#[derive(Template)]
#[template(path = "compliments_results.html")]
pub struct ComplimentsResultsTemplate {
    pub user_name: String,
    pub show_compliments: bool,
    pub compliments: Vec<&'static str>,
}

/// Animal chooser plus the fact for the chosen animal, if any.
#[derive(Template)]
#[template(path = "animal_facts.html")]
pub struct AnimalFactsTemplate {
    pub animals: Vec<&'static str>,
    pub chosen_animal: Option<String>,
    pub fact: Option<&'static str>,
}

/// Image upload form, optionally showing the freshly filtered result.
#[derive(Template)]
#[template(path = "image_filter.html")]
pub struct ImageFilterTemplate {
    pub filters: Vec<&'static str>,
    pub image_url: Option<String>,
}

/// GIF search form and results.
#[derive(Template)]
#[template(path = "gif_search.html")]
pub struct GifSearchTemplate {
    pub provider_available: bool,
    pub searched: bool,
    pub gifs: Vec<Gif>,
}
