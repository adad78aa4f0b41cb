//! Schema parsing errors.
//!
//! This module provides [`ParseError`] for malformed schema documents and
//! [`RegexError`] for pattern facets whose syntax is invalid.

use std::fmt::{self, Display};

use regex::Regex;

use super::kind::{Classify, ErrorKind, GenericKind};
use crate::describe::quote;
use crate::excerpt::{render_excerpt, ElementRef, ExcerptOptions};

/// An error found while parsing a schema document.
///
/// The rendered form is the message, followed by an indented excerpt of the
/// offending schema element when one is known.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{ElementRef, ParseError};
///
/// let error = ParseError::new(
///     "missing 'name' attribute",
///     Some(ElementRef::from("<xs:element type=\"xs:string\"/>")),
/// );
///
/// assert_eq!(
///     error.to_string(),
///     "missing 'name' attribute\n\n  <xs:element type=\"xs:string\"/>\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<'a> {
    message: String,
    schema_elem: Option<ElementRef<'a>>,
}

impl<'a> ParseError<'a> {
    /// Creates a parse error for the given message and schema element.
    pub fn new(message: impl Into<String>, schema_elem: Option<ElementRef<'a>>) -> Self {
        Self {
            message: message.into(),
            schema_elem,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending schema element, if known.
    pub fn schema_elem(&self) -> Option<ElementRef<'a>> {
        self.schema_elem
    }
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(elem) = self.schema_elem {
            write!(f, "\n\n  {}\n", render_excerpt(elem, &ExcerptOptions::default()))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError<'_> {}

impl Classify for ParseError<'_> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }

    fn generic_kind(&self) -> GenericKind {
        GenericKind::Value
    }
}

/// An invalid pattern found while parsing a schema.
///
/// Shaped and rendered exactly like [`ParseError`], but distinguishable by
/// its kind. When built from a [`regex::Error`], that error is reported as
/// the [source](std::error::Error::source).
#[derive(Debug, Clone)]
pub struct RegexError<'a> {
    inner: ParseError<'a>,
    source: Option<regex::Error>,
}

impl<'a> RegexError<'a> {
    /// Creates a regex error for the given message and schema element.
    pub fn new(message: impl Into<String>, schema_elem: Option<ElementRef<'a>>) -> Self {
        Self {
            inner: ParseError::new(message, schema_elem),
            source: None,
        }
    }

    /// Creates a regex error from a failed compilation of `pattern`.
    pub fn from_regex(
        pattern: &str,
        error: regex::Error,
        schema_elem: Option<ElementRef<'a>>,
    ) -> Self {
        let message = format!("invalid pattern {}: {}", quote(pattern), summarize(&error));
        Self {
            inner: ParseError::new(message, schema_elem),
            source: Some(error),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        self.inner.message()
    }

    /// Returns the offending schema element, if known.
    pub fn schema_elem(&self) -> Option<ElementRef<'a>> {
        self.inner.schema_elem()
    }

    /// Returns the error viewed as a general parse error.
    pub fn as_parse_error(&self) -> &ParseError<'a> {
        &self.inner
    }
}

impl PartialEq for RegexError<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Display for RegexError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for RegexError<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl Classify for RegexError<'_> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Regex
    }

    fn generic_kind(&self) -> GenericKind {
        GenericKind::Value
    }
}

/// Compiles the pattern of a facet, reporting bad syntax as a [`RegexError`].
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{compile_pattern, ElementRef};
///
/// let facet = ElementRef::from("<xs:pattern value=\"[a-z\"/>");
/// let error = compile_pattern("[a-z", Some(facet)).unwrap_err();
///
/// assert!(error.message().starts_with("invalid pattern '[a-z'"));
/// assert_eq!(error.schema_elem(), Some(facet));
/// ```
pub fn compile_pattern<'a>(
    pattern: &str,
    schema_elem: Option<ElementRef<'a>>,
) -> Result<Regex, RegexError<'a>> {
    Regex::new(pattern).map_err(|e| RegexError::from_regex(pattern, e, schema_elem))
}

// Syntax errors render as a multi-line diagram; keep only the `error:` line.
fn summarize(error: &regex::Error) -> String {
    let text = error.to_string();
    text.lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix("error: "))
        .map(str::to_string)
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_without_element() {
        let error = ParseError::new("unknown schema component", None);
        assert_eq!(error.to_string(), "unknown schema component");
        assert_eq!(error.schema_elem(), None);
    }

    #[test]
    fn test_parse_error_with_element() {
        let elem = ElementRef::from("<xs:foo/>");
        let error = ParseError::new("unknown schema component", Some(elem));
        assert_eq!(error.to_string(), "unknown schema component\n\n  <xs:foo/>\n");
    }

    #[test]
    fn test_empty_message() {
        let error = ParseError::new("", None);
        assert_eq!(error.message(), "");
        assert_eq!(error.to_string(), "");
    }

    #[test]
    fn test_regex_error_renders_like_parse_error() {
        let elem = ElementRef::from("<xs:pattern value=\"(\"/>");
        let regex_error = RegexError::new("unbalanced parenthesis", Some(elem));
        let parse_error = ParseError::new("unbalanced parenthesis", Some(elem));

        assert_eq!(regex_error.to_string(), parse_error.to_string());
        assert_eq!(regex_error.kind(), ErrorKind::Regex);
        assert_eq!(parse_error.kind(), ErrorKind::Parse);
        assert!(regex_error.source().is_none());
    }

    #[test]
    fn test_compile_pattern_success() {
        let regex = compile_pattern(r"^\d{3}$", None).unwrap();
        assert!(regex.is_match("123"));
    }

    #[test]
    fn test_compile_pattern_failure_keeps_source() {
        let error = compile_pattern("(abc", None).unwrap_err();
        assert!(error.message().starts_with("invalid pattern '(abc': "));
        assert!(!error.message().contains('\n'));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_regex_error_parse_view() {
        let error = RegexError::new("bad", None);
        assert_eq!(error.as_parse_error().message(), "bad");
        assert_eq!(error.as_parse_error().to_string(), error.to_string());
        assert_eq!(error.kind(), ErrorKind::Regex);
    }
}
