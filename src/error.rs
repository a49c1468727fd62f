//! Unified error type for the filterbox application.
//!
//! All modules funnel their failures into [`Error`], which carries enough
//! context for route handlers to derive an HTTP status code via
//! [`Error::http_status`].

/// Unified error type covering all failure modes in filterbox.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested filter name is not one of the supported kinds.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The uploaded payload could not be decoded as an image.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A page template failed to render.
    #[error("Template error: {source}")]
    Template {
        /// The underlying askama error.
        #[from]
        source: askama::Error,
    },

    /// An upstream API (Tenor) request failed.
    #[error("Upstream error [{service}]: {message}")]
    Upstream {
        /// Name of the upstream service.
        service: String,
        /// Human-readable error description.
        message: String,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::UnknownFilter(_) => 400,
            Error::Decode(_) => 422,
            Error::Validation(_) => 400,
            Error::Io { .. } => 500,
            Error::Template { .. } => 500,
            Error::Upstream { .. } => 502,
            Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode(message.into())
    }

    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Convenience constructor for [`Error::Upstream`].
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }
}

/// Result type alias using the unified Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFilter("sepia".into());
        assert_eq!(err.to_string(), "Unknown filter: sepia");

        let err = Error::decode("not an image");
        assert_eq!(err.to_string(), "Decode error: not an image");

        let err = Error::upstream("tenor", "timed out");
        assert_eq!(err.to_string(), "Upstream error [tenor]: timed out");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(Error::UnknownFilter("x".into()).http_status(), 400);
        assert_eq!(Error::decode("x").http_status(), 422);
        assert_eq!(Error::validation("x").http_status(), 400);
        assert_eq!(Error::upstream("tenor", "x").http_status(), 502);
        assert_eq!(Error::internal("x").http_status(), 500);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.http_status(), 500);
    }
}
