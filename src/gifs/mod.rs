//! GIF search against external providers.

mod provider;
mod tenor;

pub use provider::{Gif, GifProvider};
pub use tenor::TenorClient;
