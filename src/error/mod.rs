//! Error types for XML Schema processing.
//!
//! This module provides one error type per failure family: schema parsing,
//! pattern syntax, component shape, and the runtime validator errors, plus
//! the generic categories they also belong to.

mod component;
mod generic;
mod kind;
mod parse;
mod schema_error;
mod validator;

pub use component::{ComponentError, RefDescriptor, ShapedType};
pub use generic::GenericError;
pub use kind::{Classify, ErrorKind, GenericKind};
pub use parse::{compile_pattern, ParseError, RegexError};
pub use schema_error::{ValidationResult, XmlSchemaError, XmlSchemaErrors};
pub use validator::{DecodeError, EncodeError, ErrorContext, ValidationError, ValidatorError};
