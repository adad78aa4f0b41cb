//! The crate-wide error type and error accumulation.
//!
//! This module provides [`XmlSchemaError`], which wraps every concrete error
//! of the crate, and [`XmlSchemaErrors`] for collecting several of them.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use super::component::ComponentError;
use super::generic::GenericError;
use super::kind::{Classify, ErrorKind, GenericKind};
use super::parse::{ParseError, RegexError};
use super::validator::{DecodeError, EncodeError, ValidationError, ValidatorError};

/// Any error of the XML Schema library.
///
/// Each variant renders exactly like the error it wraps.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{Classify, ErrorKind, ValidationError, XmlSchemaError};
///
/// fn check(value: i64) -> Result<i64, XmlSchemaError<'static>> {
///     if value < 0 {
///         return Err(ValidationError::new("XsdAtomicRestriction(base='xs:int')", value).into());
///     }
///     Ok(value)
/// }
///
/// let error = check(-1).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Validation);
/// assert!(error.summary().starts_with("failed validating -1"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum XmlSchemaError<'a> {
    /// Malformed schema document.
    #[error(transparent)]
    Parse(ParseError<'a>),

    /// Invalid pattern syntax.
    #[error(transparent)]
    Regex(RegexError<'a>),

    /// Unexpected shape of a schema component.
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// Generic validator failure.
    #[error(transparent)]
    Validator(ValidatorError<'a>),

    /// Decoding failure.
    #[error(transparent)]
    Decode(DecodeError<'a>),

    /// Encoding failure.
    #[error(transparent)]
    Encode(EncodeError<'a>),

    /// Validation failure.
    #[error(transparent)]
    Validation(ValidationError<'a>),

    /// Failure without schema-specific context.
    #[error(transparent)]
    Generic(#[from] GenericError),
}

impl XmlSchemaError<'_> {
    /// Returns the message alone, without reason or element excerpts.
    pub fn summary(&self) -> String {
        match self {
            XmlSchemaError::Parse(e) => e.message().to_string(),
            XmlSchemaError::Regex(e) => e.message().to_string(),
            XmlSchemaError::Component(e) => e.to_string(),
            XmlSchemaError::Validator(e) => e.message().to_string(),
            XmlSchemaError::Decode(e) => e.message().to_string(),
            XmlSchemaError::Encode(e) => e.message().to_string(),
            XmlSchemaError::Validation(e) => e.message().to_string(),
            XmlSchemaError::Generic(e) => e.to_string(),
        }
    }

    /// Returns the reason of a validator-family error.
    pub fn reason(&self) -> Option<&str> {
        match self {
            XmlSchemaError::Validator(e) => e.reason(),
            XmlSchemaError::Decode(e) => e.reason(),
            XmlSchemaError::Encode(e) => e.reason(),
            XmlSchemaError::Validation(e) => e.reason(),
            _ => None,
        }
    }

    fn as_classify(&self) -> &dyn Classify {
        match self {
            XmlSchemaError::Parse(e) => e,
            XmlSchemaError::Regex(e) => e,
            XmlSchemaError::Component(e) => e,
            XmlSchemaError::Validator(e) => e,
            XmlSchemaError::Decode(e) => e,
            XmlSchemaError::Encode(e) => e,
            XmlSchemaError::Validation(e) => e,
            XmlSchemaError::Generic(e) => e,
        }
    }
}

impl Classify for XmlSchemaError<'_> {
    fn kind(&self) -> ErrorKind {
        self.as_classify().kind()
    }

    fn generic_kind(&self) -> GenericKind {
        self.as_classify().generic_kind()
    }
}

macro_rules! borrowed_from {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        $(
            impl<'a> From<$ty<'a>> for XmlSchemaError<'a> {
                fn from(error: $ty<'a>) -> Self {
                    XmlSchemaError::$variant(error)
                }
            }
        )*
    };
}

borrowed_from!(
    Parse(ParseError),
    Regex(RegexError),
    Validator(ValidatorError),
    Decode(DecodeError),
    Encode(EncodeError),
    Validation(ValidationError),
);

impl From<std::io::Error> for XmlSchemaError<'_> {
    fn from(error: std::io::Error) -> Self {
        XmlSchemaError::Generic(GenericError::Os(error))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<XmlSchemaError<'static>>();
    assert_sync::<XmlSchemaError<'static>>();
};

/// A non-empty collection of errors found in one document.
///
/// `XmlSchemaErrors` implements `Semigroup`, so collections found in
/// different parts of a document combine into one report.
///
/// # Example
///
/// ```rust
/// use stillwater::prelude::*;
/// use xmlschema_errors::{ParseError, ValidationError, XmlSchemaErrors};
///
/// let parse = XmlSchemaErrors::single(ParseError::new("bad facet", None).into());
/// let validation = XmlSchemaErrors::single(ValidationError::new("V", 3i32).into());
///
/// let all = parse.combine(validation);
/// assert_eq!(all.len(), 2);
/// ```
#[derive(Debug)]
pub struct XmlSchemaErrors<'a> {
    head: XmlSchemaError<'a>,
    tail: Vec<XmlSchemaError<'a>>,
}

impl<'a> XmlSchemaErrors<'a> {
    /// Creates a collection containing a single error.
    pub fn single(error: XmlSchemaError<'a>) -> Self {
        Self {
            head: error,
            tail: Vec::new(),
        }
    }

    /// Creates a collection from a `Vec`, or returns `None` if it is empty.
    pub fn from_vec(errors: Vec<XmlSchemaError<'a>>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = errors.next()?;
        Some(Self {
            head,
            tail: errors.collect(),
        })
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always false; the collection holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &XmlSchemaError<'a>> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Returns the first error.
    pub fn first(&self) -> &XmlSchemaError<'a> {
        &self.head
    }

    /// Returns the errors of the given domain kind.
    pub fn of_kind(&self, kind: ErrorKind) -> Vec<&XmlSchemaError<'a>> {
        self.iter().filter(|e| e.kind() == kind).collect()
    }

    /// Returns the errors that match the given generic category.
    pub fn of_generic_kind(&self, kind: GenericKind) -> Vec<&XmlSchemaError<'a>> {
        self.iter().filter(|e| e.is_generic(kind)).collect()
    }

    /// Converts the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<XmlSchemaError<'a>> {
        let mut errors = Vec::with_capacity(self.len());
        errors.push(self.head);
        errors.extend(self.tail);
        errors
    }
}

impl Semigroup for XmlSchemaErrors<'_> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<'a> From<XmlSchemaError<'a>> for XmlSchemaErrors<'a> {
    fn from(error: XmlSchemaError<'a>) -> Self {
        Self::single(error)
    }
}

impl Display for XmlSchemaErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} error(s) found:", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error.summary())?;
        }
        Ok(())
    }
}

impl std::error::Error for XmlSchemaErrors<'_> {}

impl<'a> IntoIterator for XmlSchemaErrors<'a> {
    type Item = XmlSchemaError<'a>;
    type IntoIter = std::vec::IntoIter<XmlSchemaError<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Result of an operation that reports every failure it finds.
pub type ValidationResult<'a, T> = stillwater::Validation<T, XmlSchemaErrors<'a>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::component::RefDescriptor;
    use crate::error::validator::ErrorContext;

    #[test]
    fn test_umbrella_renders_like_inner() {
        let inner = DecodeError::with_context("V", "x", "D", ErrorContext::new().with_reason("r"));
        let text = inner.to_string();
        let error = XmlSchemaError::from(inner);
        assert_eq!(error.to_string(), text);
        assert_eq!(error.summary(), "cannot decode 'x' using the type D of validator V.");
        assert_eq!(error.reason(), Some("r"));
    }

    #[test]
    fn test_umbrella_classification() {
        let error: XmlSchemaError = GenericError::key("k").into();
        assert_eq!(error.kind(), ErrorKind::Key);
        assert!(error.is_generic(GenericKind::Lookup));

        let error: XmlSchemaError = ComponentError::new("C", "n", RefDescriptor::None, "m").into();
        assert_eq!(error.kind(), ErrorKind::Component);
        assert!(error.is_generic(GenericKind::Value));
        assert!(error.reason().is_none());
    }

    #[test]
    fn test_borrowed_errors_convert_with_their_kind() {
        let document = roxmltree::Document::parse("<xs:pattern value='['/>").unwrap();
        let elem = crate::excerpt::ElementRef::from(document.root_element());

        let errors: Vec<XmlSchemaError<'_>> = vec![
            ParseError::new("p", Some(elem)).into(),
            RegexError::new("r", Some(elem)).into(),
            ValidatorError::new("V", "v").into(),
            DecodeError::new("V", "x", "D").into(),
            EncodeError::new("V", "x", "E").into(),
            ValidationError::new("V", "x").into(),
        ];
        let kinds: Vec<ErrorKind> = errors.iter().map(Classify::kind).collect();

        assert_eq!(
            kinds,
            vec![
                ErrorKind::Parse,
                ErrorKind::Regex,
                ErrorKind::Validator,
                ErrorKind::Decode,
                ErrorKind::Encode,
                ErrorKind::Validation,
            ]
        );
    }

    #[test]
    fn test_io_error_into_umbrella() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: XmlSchemaError = io.into();
        assert_eq!(error.kind(), ErrorKind::Os);
    }

    #[test]
    fn test_collection_queries() {
        let errors = XmlSchemaErrors::single(ParseError::new("p", None).into())
            .combine(XmlSchemaErrors::single(ValidationError::new("V", 1i32).into()))
            .combine(XmlSchemaErrors::single(GenericError::url("u", "r").into()));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.first().kind(), ErrorKind::Parse);
        assert_eq!(errors.of_kind(ErrorKind::Validation).len(), 1);
        assert_eq!(errors.of_generic_kind(GenericKind::Value).len(), 2);
        assert_eq!(errors.of_generic_kind(GenericKind::Url).len(), 1);
    }

    #[test]
    fn test_collection_from_vec() {
        assert!(XmlSchemaErrors::from_vec(Vec::new()).is_none());

        let errors = XmlSchemaErrors::from_vec(vec![ParseError::new("a", None).into()]).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_collection_display() {
        let errors = XmlSchemaErrors::single(ParseError::new("bad facet", None).into())
            .combine(XmlSchemaErrors::single(ValidationError::new("V", "x").into()));
        let display = errors.to_string();

        assert!(display.starts_with("2 error(s) found:"));
        assert!(display.contains("  1. bad facet"));
        assert!(display.contains("  2. failed validating 'x' with V."));
    }
}
