//! Filesystem-level storage for uploaded images and their filtered variants.
//!
//! Originals are kept unmodified under the base directory; each filtered
//! result is written next to them as `<filter>-<filename>`. The filter
//! prefix is the sole collision-avoidance scheme: the same filename with a
//! different filter yields a distinct asset, while repeating a filename and
//! filter overwrites the previous asset (last write wins).

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filters::FilterKind;

/// Filesystem manager for the public image directory.
pub struct ImageStore {
    base_dir: PathBuf,
}

impl ImageStore {
    /// Create a new `ImageStore` rooted at the given directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The directory originals and derived assets live in.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write the untouched upload bytes to `{base_dir}/{filename}`.
    ///
    /// The client-supplied filename is reduced to its final path component
    /// first. Returns the sanitized filename actually used.
    pub fn save_original(&self, filename: &str, data: &[u8]) -> Result<String> {
        let name = sanitize_filename(filename)?;

        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(self.base_dir.join(&name), data)?;

        Ok(name)
    }

    /// File name of the derived asset for a filter applied to `filename`.
    pub fn derived_name(kind: FilterKind, filename: &str) -> String {
        format!("{}-{}", kind, filename)
    }

    /// Full path of the derived asset for a filter applied to `filename`.
    pub fn derived_path(&self, kind: FilterKind, filename: &str) -> PathBuf {
        self.base_dir.join(Self::derived_name(kind, filename))
    }
}

/// Reduce a client-supplied filename to its final path component.
///
/// Uploads name the file; they must not pick the directory. Empty names
/// (or names that are all path) are a validation error.
fn sanitize_filename(filename: &str) -> Result<String> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::validation(format!(
            "Invalid upload filename: {filename:?}"
        )));
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_name() {
        assert_eq!(
            ImageStore::derived_name(FilterKind::Sharpen, "cat.png"),
            "sharpen-cat.png"
        );
        assert_eq!(
            ImageStore::derived_name(FilterKind::EdgeEnhance, "dog.jpg"),
            "edge-enhance-dog.jpg"
        );
    }

    #[test]
    fn test_derived_path() {
        let store = ImageStore::new(PathBuf::from("/data/images"));
        assert_eq!(
            store.derived_path(FilterKind::Blur, "cat.png"),
            PathBuf::from("/data/images/blur-cat.png")
        );
    }

    #[test]
    fn test_distinct_filters_distinct_assets() {
        let store = ImageStore::new(PathBuf::from("/data/images"));
        let a = store.derived_path(FilterKind::Blur, "cat.png");
        let b = store.derived_path(FilterKind::Emboss, "cat.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_filename("cat.png").unwrap(), "cat.png");
        assert_eq!(sanitize_filename("a/b/cat.png").unwrap(), "cat.png");
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "passwd");
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("/").is_err());
    }

    #[test]
    fn test_save_original_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().to_path_buf());

        let name = store.save_original("nested/cat.png", b"pixels").unwrap();
        assert_eq!(name, "cat.png");

        let written = std::fs::read(dir.path().join("cat.png")).unwrap();
        assert_eq!(written, b"pixels");
    }

    #[test]
    fn test_save_original_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().to_path_buf());

        store.save_original("cat.png", b"first").unwrap();
        store.save_original("cat.png", b"second").unwrap();

        let written = std::fs::read(dir.path().join("cat.png")).unwrap();
        assert_eq!(written, b"second");
    }
}
