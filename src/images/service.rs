//! Image service coordinating upload persistence and filter application.

use image::ImageFormat;

use crate::error::{Error, Result};
use crate::filters::{self, FilterKind};

use super::storage::ImageStore;

/// A filtered image written to the public image directory.
#[derive(Debug, Clone)]
pub struct FilteredImage {
    /// File name of the derived asset (e.g. `sharpen-cat.png`).
    pub file_name: String,
    /// Width of the derived image in pixels.
    pub width: u32,
    /// Height of the derived image in pixels.
    pub height: u32,
}

/// High-level service tying the filter transforms to filesystem storage.
pub struct ImageService {
    store: ImageStore,
}

impl ImageService {
    /// Create a new `ImageService` over the given store.
    pub fn new(store: ImageStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Persist an upload and write its filtered variant.
    ///
    /// The original bytes are stored unmodified; the filtered result goes to
    /// the `<filter>-<filename>` path, which is the reference returned to
    /// callers. Decoding happens after the original is persisted; a bad
    /// payload leaves the upload on disk with no derived asset.
    pub fn filter_upload(
        &self,
        filename: &str,
        data: &[u8],
        kind: FilterKind,
    ) -> Result<FilteredImage> {
        let name = self.store.save_original(filename, data)?;

        let img = image::load_from_memory(data)
            .map_err(|e| Error::decode(format!("Cannot decode {name}: {e}")))?;

        let out = filters::apply(&img, kind);
        let path = self.store.derived_path(kind, &name);

        // Re-encode in the format named by the extension; anything
        // unrecognized is written as PNG under the same name.
        let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Png);
        out.save_with_format(&path, format).map_err(|e| match e {
            image::ImageError::IoError(io) => Error::from(io),
            other => Error::internal(format!("Failed to encode filtered image: {other}")),
        })?;

        tracing::debug!(
            filter = %kind,
            file = %name,
            width = out.width(),
            height = out.height(),
            "Stored filtered image"
        );

        Ok(FilteredImage {
            file_name: ImageStore::derived_name(kind, &name),
            width: out.width(),
            height: out.height(),
        })
    }
}
