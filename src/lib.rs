//! # xmlschema-errors
//!
//! The error taxonomy of an XML Schema processing library: every failure that
//! can occur while parsing a schema, validating an instance against it, or
//! decoding and encoding values.
//!
//! ## Overview
//!
//! Each failure family has its own error type carrying the context available
//! where the failure was detected: the offending schema element, the offending
//! instance element, a human-readable reason. Rendering an error (through
//! `Display`) produces a deterministic multi-section diagnostic that includes
//! truncated excerpts of the referenced XML nodes.
//!
//! ## Core Types
//!
//! - [`ParseError`] / [`RegexError`]: malformed schema documents and invalid patterns
//! - [`ComponentError`]: a schema component's attribute or item has an unexpected shape
//! - [`ValidatorError`], [`DecodeError`], [`EncodeError`], [`ValidationError`]: runtime failures
//! - [`GenericError`]: failures described only by a generic category
//! - [`XmlSchemaError`]: any of the above; [`XmlSchemaErrors`]: a non-empty collection
//! - [`ElementRef`] and [`render_excerpt`]: borrowed XML nodes and their excerpts
//!
//! ## Example
//!
//! ```rust
//! use xmlschema_errors::{ElementRef, ErrorContext, ValidationError};
//!
//! let schema = roxmltree::Document::parse(r#"<xs:element xmlns:xs="http://www.w3.org/2001/XMLSchema" name="qty" type="xs:positiveInteger"/>"#).unwrap();
//! let instance = roxmltree::Document::parse("<qty>0</qty>").unwrap();
//!
//! let error = ValidationError::with_context(
//!     "XsdElement(name='qty')",
//!     "0",
//!     ErrorContext::new()
//!         .with_reason("value must be greater than 0")
//!         .with_schema_elem(schema.root_element())
//!         .with_elem(instance.root_element()),
//! );
//!
//! let text = error.to_string();
//! assert!(text.starts_with("failed validating '0' with XsdElement(name='qty')."));
//! assert!(text.contains("\n\nReason: value must be greater than 0\n"));
//! assert!(text.ends_with("\nInstance:\n\n  <qty>0</qty>\n"));
//! ```

pub mod describe;
pub mod error;
pub mod excerpt;

pub use describe::Describe;
pub use error::{
    compile_pattern, Classify, ComponentError, DecodeError, EncodeError, ErrorContext, ErrorKind,
    GenericError, GenericKind, ParseError, RefDescriptor, RegexError, ShapedType,
    ValidationError, ValidationResult, ValidatorError, XmlSchemaError, XmlSchemaErrors,
};
pub use excerpt::{render_excerpt, ElementRef, ExcerptOptions, MAX_EXCERPT_LINES};
