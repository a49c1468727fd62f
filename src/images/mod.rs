//! Image upload storage and filter application.
//!
//! [`ImageStore`] owns the public image directory; [`ImageService`] layers
//! decode / transform / re-encode on top of it.

mod service;
mod storage;

pub use service::{FilteredImage, ImageService};
pub use storage::ImageStore;
