//! Error classification.
//!
//! Every error of this crate has a domain kind ([`ErrorKind`]) and also
//! belongs to one generic category ([`GenericKind`]), so a handler that only
//! knows about "any invalid value" or "any lookup failure" still matches it.

use std::fmt::{self, Display};

/// The domain kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed schema document.
    Parse,
    /// Invalid pattern syntax in a schema.
    Regex,
    /// Unexpected shape of a schema component's attribute or item.
    Component,
    /// Generic failure of a validator.
    Validator,
    /// A value could not be decoded from XML text.
    Decode,
    /// A value could not be encoded to XML text.
    Encode,
    /// An instance failed a validation rule.
    Validation,
    /// Missing resource or operating-system failure.
    Os,
    /// Failed lookup.
    Lookup,
    /// Missing or inaccessible attribute.
    Attribute,
    /// Type mismatch.
    Type,
    /// Invalid value.
    Value,
    /// Missing key.
    Key,
    /// URL access failure.
    Url,
}

impl ErrorKind {
    /// Returns a stable machine-readable name (e.g. `decode_error`).
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse_error",
            ErrorKind::Regex => "regex_error",
            ErrorKind::Component => "component_error",
            ErrorKind::Validator => "validator_error",
            ErrorKind::Decode => "decode_error",
            ErrorKind::Encode => "encode_error",
            ErrorKind::Validation => "validation_error",
            ErrorKind::Os => "os_error",
            ErrorKind::Lookup => "lookup_error",
            ErrorKind::Attribute => "attribute_error",
            ErrorKind::Type => "type_error",
            ErrorKind::Value => "value_error",
            ErrorKind::Key => "key_error",
            ErrorKind::Url => "url_error",
        }
    }

    /// Returns true for the runtime validator family (validator, decode, encode, validation).
    pub fn is_validator_family(&self) -> bool {
        matches!(
            self,
            ErrorKind::Validator | ErrorKind::Decode | ErrorKind::Encode | ErrorKind::Validation
        )
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The generic category an error also belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericKind {
    /// Resource or operating-system failure.
    Os,
    /// Lookup failure.
    Lookup,
    /// Attribute-access failure.
    Attribute,
    /// Type mismatch.
    Type,
    /// Invalid value.
    Value,
    /// Missing key.
    Key,
    /// URL failure.
    Url,
}

impl GenericKind {
    /// Returns true when this category is a specialization of `other`.
    ///
    /// A missing key is also a lookup failure and a URL failure is also an
    /// OS failure. Every other category only matches itself.
    pub fn is_a(&self, other: GenericKind) -> bool {
        *self == other
            || matches!(
                (*self, other),
                (GenericKind::Key, GenericKind::Lookup) | (GenericKind::Url, GenericKind::Os)
            )
    }
}

impl From<GenericKind> for ErrorKind {
    fn from(kind: GenericKind) -> Self {
        match kind {
            GenericKind::Os => ErrorKind::Os,
            GenericKind::Lookup => ErrorKind::Lookup,
            GenericKind::Attribute => ErrorKind::Attribute,
            GenericKind::Type => ErrorKind::Type,
            GenericKind::Value => ErrorKind::Value,
            GenericKind::Key => ErrorKind::Key,
            GenericKind::Url => ErrorKind::Url,
        }
    }
}

/// Reports the domain kind and generic category of an error.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{Classify, ErrorKind, GenericKind, ParseError};
///
/// let error = ParseError::new("unexpected child", None);
/// assert_eq!(error.kind(), ErrorKind::Parse);
/// assert!(error.is_generic(GenericKind::Value));
/// ```
pub trait Classify {
    /// Returns the domain kind.
    fn kind(&self) -> ErrorKind;

    /// Returns the generic category.
    fn generic_kind(&self) -> GenericKind;

    /// Returns true when the error matches the generic category `kind`.
    fn is_generic(&self, kind: GenericKind) -> bool {
        self.generic_kind().is_a(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            ErrorKind::Parse,
            ErrorKind::Regex,
            ErrorKind::Component,
            ErrorKind::Validator,
            ErrorKind::Decode,
            ErrorKind::Encode,
            ErrorKind::Validation,
            ErrorKind::Os,
            ErrorKind::Lookup,
            ErrorKind::Attribute,
            ErrorKind::Type,
            ErrorKind::Value,
            ErrorKind::Key,
            ErrorKind::Url,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_validator_family() {
        assert!(ErrorKind::Decode.is_validator_family());
        assert!(ErrorKind::Validation.is_validator_family());
        assert!(!ErrorKind::Parse.is_validator_family());
        assert!(!ErrorKind::Value.is_validator_family());
    }

    #[test]
    fn test_key_is_a_lookup() {
        assert!(GenericKind::Key.is_a(GenericKind::Lookup));
        assert!(GenericKind::Key.is_a(GenericKind::Key));
        assert!(!GenericKind::Lookup.is_a(GenericKind::Key));
        assert!(!GenericKind::Value.is_a(GenericKind::Type));
    }

    #[test]
    fn test_url_is_an_os_failure() {
        assert!(GenericKind::Url.is_a(GenericKind::Os));
        assert!(GenericKind::Url.is_a(GenericKind::Url));
        assert!(!GenericKind::Os.is_a(GenericKind::Url));
    }

    #[test]
    fn test_generic_to_domain_kind() {
        assert_eq!(ErrorKind::from(GenericKind::Url), ErrorKind::Url);
        assert_eq!(ErrorKind::Url.to_string(), "url_error");
    }
}
