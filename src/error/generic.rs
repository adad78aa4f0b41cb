//! Errors described only by a generic category.
//!
//! Collaborators raise these when a failure has no schema-specific context:
//! a missing resource, an unknown key, a value of the wrong type.

use super::kind::{Classify, ErrorKind, GenericKind};

/// A failure in one of the generic categories.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{Classify, GenericError, GenericKind};
///
/// let error = GenericError::key("unknown namespace prefix 'xs'");
/// assert!(error.is_generic(GenericKind::Lookup));
/// assert_eq!(error.to_string(), "unknown namespace prefix 'xs'");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GenericError {
    /// Resource or operating-system failure.
    #[error("{0}")]
    Os(#[from] std::io::Error),

    /// Lookup failure.
    #[error("{0}")]
    Lookup(String),

    /// Attribute-access failure.
    #[error("{0}")]
    Attribute(String),

    /// Type mismatch.
    #[error("{0}")]
    Type(String),

    /// Invalid value.
    #[error("{0}")]
    Value(String),

    /// Missing key.
    #[error("{0}")]
    Key(String),

    /// A URL could not be accessed.
    #[error("cannot access URL '{url}': {reason}")]
    Url {
        /// The URL that failed.
        url: String,
        /// Why access failed.
        reason: String,
    },
}

impl GenericError {
    /// Creates a lookup failure.
    pub fn lookup(message: impl Into<String>) -> Self {
        GenericError::Lookup(message.into())
    }

    /// Creates an attribute-access failure.
    pub fn attribute(message: impl Into<String>) -> Self {
        GenericError::Attribute(message.into())
    }

    /// Creates a type mismatch.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        GenericError::Type(message.into())
    }

    /// Creates an invalid-value failure.
    pub fn value(message: impl Into<String>) -> Self {
        GenericError::Value(message.into())
    }

    /// Creates a missing-key failure.
    pub fn key(message: impl Into<String>) -> Self {
        GenericError::Key(message.into())
    }

    /// Creates a URL access failure.
    pub fn url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        GenericError::Url {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl Classify for GenericError {
    fn kind(&self) -> ErrorKind {
        self.generic_kind().into()
    }

    fn generic_kind(&self) -> GenericKind {
        match self {
            GenericError::Os(_) => GenericKind::Os,
            GenericError::Lookup(_) => GenericKind::Lookup,
            GenericError::Attribute(_) => GenericKind::Attribute,
            GenericError::Type(_) => GenericKind::Type,
            GenericError::Value(_) => GenericKind::Value,
            GenericError::Key(_) => GenericKind::Key,
            GenericError::Url { .. } => GenericKind::Url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_io_error_converts_to_os() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "schema.xsd not found");
        let error: GenericError = io_error.into();
        assert_eq!(error.kind(), ErrorKind::Os);
        assert_eq!(error.to_string(), "schema.xsd not found");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_url_message() {
        let error = GenericError::url("http://example.com/a.xsd", "connection refused");
        assert_eq!(
            error.to_string(),
            "cannot access URL 'http://example.com/a.xsd': connection refused"
        );
        assert_eq!(error.generic_kind(), GenericKind::Url);
    }

    #[test]
    fn test_each_constructor_classified() {
        assert_eq!(GenericError::lookup("x").generic_kind(), GenericKind::Lookup);
        assert_eq!(GenericError::attribute("x").generic_kind(), GenericKind::Attribute);
        assert_eq!(GenericError::type_mismatch("x").generic_kind(), GenericKind::Type);
        assert_eq!(GenericError::value("x").generic_kind(), GenericKind::Value);
        assert_eq!(GenericError::key("x").kind(), ErrorKind::Key);
    }

    #[test]
    fn test_key_matches_lookup_handlers() {
        let error = GenericError::key("missing");
        assert!(error.is_generic(GenericKind::Lookup));
        assert!(!GenericError::lookup("missing").is_generic(GenericKind::Key));
    }

    #[test]
    fn test_url_matches_os_handlers() {
        let error = GenericError::url("http://example.com/a.xsd", "refused");
        assert!(error.is_generic(GenericKind::Os));
        assert_eq!(error.kind(), ErrorKind::Url);

        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(!GenericError::from(io_error).is_generic(GenericKind::Url));
    }
}
