//! Runtime validator errors.
//!
//! This module provides [`ValidatorError`], the base error of schema
//! validators, and its three specializations: [`DecodeError`],
//! [`EncodeError`] and [`ValidationError`]. All of them render the same
//! multi-section diagnostic:
//!
//! ```text
//! <message>
//!
//! Reason: <reason>
//!
//! Schema:
//!
//!   <schema element excerpt>
//!
//! Instance:
//!
//!   <instance element excerpt>
//! ```
//!
//! Sections whose context is absent collapse to a single newline.

use std::fmt::{self, Display};

use super::kind::{Classify, ErrorKind, GenericKind};
use crate::describe::Describe;
use crate::excerpt::{render_excerpt, ElementRef, ExcerptOptions};

/// Optional context attached to a validator error.
///
/// Built once and handed to an error constructor; the error never changes
/// afterwards.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::{ElementRef, ErrorContext};
///
/// let context = ErrorContext::new()
///     .with_reason("value must be positive")
///     .with_elem(ElementRef::from("<qty>-1</qty>"));
///
/// assert_eq!(context.reason(), Some("value must be positive"));
/// assert!(context.schema_elem().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext<'a> {
    reason: Option<String>,
    schema_elem: Option<ElementRef<'a>>,
    elem: Option<ElementRef<'a>>,
}

impl<'a> ErrorContext<'a> {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the human-readable reason of the failure.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the schema element the validator was built from.
    pub fn with_schema_elem(mut self, elem: impl Into<ElementRef<'a>>) -> Self {
        self.schema_elem = Some(elem.into());
        self
    }

    /// Sets the instance element being processed.
    pub fn with_elem(mut self, elem: impl Into<ElementRef<'a>>) -> Self {
        self.elem = Some(elem.into());
        self
    }

    /// Returns the reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the schema element, if any.
    pub fn schema_elem(&self) -> Option<ElementRef<'a>> {
        self.schema_elem
    }

    /// Returns the instance element, if any.
    pub fn elem(&self) -> Option<ElementRef<'a>> {
        self.elem
    }
}

/// An error raised by a schema validator.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::ValidatorError;
///
/// let error = ValidatorError::new("XsdAtomicBuiltin(name='xs:int')", "no decoder available");
/// assert_eq!(error.to_string(), "no decoder available\n\n\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorError<'a> {
    validator: String,
    message: String,
    context: ErrorContext<'a>,
}

impl<'a> ValidatorError<'a> {
    /// Creates a validator error with no reason and no elements.
    pub fn new(validator: impl Display, message: impl Into<String>) -> Self {
        Self::with_context(validator, message, ErrorContext::new())
    }

    /// Creates a validator error with the given context.
    pub fn with_context(
        validator: impl Display,
        message: impl Into<String>,
        context: ErrorContext<'a>,
    ) -> Self {
        Self::build(ErrorKind::Validator, validator.to_string(), message.into(), context)
    }

    fn build(
        kind: ErrorKind,
        validator: String,
        message: String,
        context: ErrorContext<'a>,
    ) -> Self {
        tracing::debug!(
            validator = %validator,
            kind = %kind,
            has_reason = context.reason.is_some(),
            "validator error"
        );

        Self {
            validator,
            message,
            context,
        }
    }

    /// Returns the display form of the validator.
    pub fn validator(&self) -> &str {
        &self.validator
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.context.reason()
    }

    /// Returns the schema element, if any.
    pub fn schema_elem(&self) -> Option<ElementRef<'a>> {
        self.context.schema_elem()
    }

    /// Returns the instance element, if any.
    pub fn elem(&self) -> Option<ElementRef<'a>> {
        self.context.elem()
    }

    /// Returns the whole context.
    pub fn context(&self) -> &ErrorContext<'a> {
        &self.context
    }
}

impl Display for ValidatorError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = ExcerptOptions::default();

        f.write_str(&self.message)?;

        match self.reason() {
            Some(reason) => write!(f, "\n\nReason: {}\n", reason)?,
            None => f.write_str("\n")?,
        }

        match self.schema_elem() {
            Some(elem) => write!(f, "\nSchema:\n\n  {}\n", render_excerpt(elem, &options))?,
            None => f.write_str("\n")?,
        }

        match self.elem() {
            Some(elem) => write!(f, "\nInstance:\n\n  {}\n", render_excerpt(elem, &options))?,
            None => f.write_str("\n")?,
        }

        Ok(())
    }
}

impl std::error::Error for ValidatorError<'_> {}

impl Classify for ValidatorError<'_> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validator
    }

    fn generic_kind(&self) -> GenericKind {
        GenericKind::Value
    }
}

// Accessors shared by the specializations, forwarded to the base error.
macro_rules! validator_error_common {
    ($ty:ident, $kind:expr) => {
        impl<'a> $ty<'a> {
            /// Returns the display form of the validator.
            pub fn validator(&self) -> &str {
                self.base.validator()
            }

            /// Returns the error message.
            pub fn message(&self) -> &str {
                self.base.message()
            }

            /// Returns the reason, if any.
            pub fn reason(&self) -> Option<&str> {
                self.base.reason()
            }

            /// Returns the schema element, if any.
            pub fn schema_elem(&self) -> Option<ElementRef<'a>> {
                self.base.schema_elem()
            }

            /// Returns the instance element, if any.
            pub fn elem(&self) -> Option<ElementRef<'a>> {
                self.base.elem()
            }

            /// Returns the error viewed as a base validator error.
            pub fn as_validator_error(&self) -> &ValidatorError<'a> {
                &self.base
            }
        }

        impl Display for $ty<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.base, f)
            }
        }

        impl std::error::Error for $ty<'_> {}

        impl Classify for $ty<'_> {
            fn kind(&self) -> ErrorKind {
                $kind
            }

            fn generic_kind(&self) -> GenericKind {
                GenericKind::Value
            }
        }
    };
}

/// XML data that cannot be decoded to a value.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::DecodeError;
///
/// let error = DecodeError::new("V", "x", "D");
/// assert_eq!(error.message(), "cannot decode 'x' using the type D of validator V.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError<'a> {
    base: ValidatorError<'a>,
    obj: String,
    decoder: String,
}

impl<'a> DecodeError<'a> {
    /// Creates a decode error with no reason and no elements.
    pub fn new(validator: impl Display, obj: impl Describe, decoder: impl Display) -> Self {
        Self::with_context(validator, obj, decoder, ErrorContext::new())
    }

    /// Creates a decode error with the given context.
    pub fn with_context(
        validator: impl Display,
        obj: impl Describe,
        decoder: impl Display,
        context: ErrorContext<'a>,
    ) -> Self {
        let validator = validator.to_string();
        let obj = obj.describe();
        let decoder = decoder.to_string();
        let message = format!(
            "cannot decode {} using the type {} of validator {}.",
            obj, decoder, validator
        );

        Self {
            base: ValidatorError::build(ErrorKind::Decode, validator, message, context),
            obj,
            decoder,
        }
    }

    /// Returns the display form of the object that failed to decode.
    pub fn obj(&self) -> &str {
        &self.obj
    }

    /// Returns the display form of the decoding type.
    pub fn decoder(&self) -> &str {
        &self.decoder
    }
}

validator_error_common!(DecodeError, ErrorKind::Decode);

/// A value that cannot be encoded to XML data.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::EncodeError;
///
/// let error = EncodeError::new("V", 1.5f64, "xs:int");
/// assert_eq!(error.message(), "cannot encode 1.5 using the type xs:int of validator V.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError<'a> {
    base: ValidatorError<'a>,
    obj: String,
    encoder: String,
}

impl<'a> EncodeError<'a> {
    /// Creates an encode error with no reason and no elements.
    pub fn new(validator: impl Display, obj: impl Describe, encoder: impl Display) -> Self {
        Self::with_context(validator, obj, encoder, ErrorContext::new())
    }

    /// Creates an encode error with the given context.
    pub fn with_context(
        validator: impl Display,
        obj: impl Describe,
        encoder: impl Display,
        context: ErrorContext<'a>,
    ) -> Self {
        let validator = validator.to_string();
        let obj = obj.describe();
        let encoder = encoder.to_string();
        let message = format!(
            "cannot encode {} using the type {} of validator {}.",
            obj, encoder, validator
        );

        Self {
            base: ValidatorError::build(ErrorKind::Encode, validator, message, context),
            obj,
            encoder,
        }
    }

    /// Returns the display form of the object that failed to encode.
    pub fn obj(&self) -> &str {
        &self.obj
    }

    /// Returns the display form of the encoding type.
    pub fn encoder(&self) -> &str {
        &self.encoder
    }
}

validator_error_common!(EncodeError, ErrorKind::Encode);

/// XML data that does not satisfy a schema validator.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::ValidationError;
///
/// let error = ValidationError::new("V", 42i32);
/// assert_eq!(error.message(), "failed validating 42 with V.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError<'a> {
    base: ValidatorError<'a>,
    value: String,
}

impl<'a> ValidationError<'a> {
    /// Creates a validation error with no reason and no elements.
    pub fn new(validator: impl Display, value: impl Describe) -> Self {
        Self::with_context(validator, value, ErrorContext::new())
    }

    /// Creates a validation error with the given context.
    pub fn with_context(
        validator: impl Display,
        value: impl Describe,
        context: ErrorContext<'a>,
    ) -> Self {
        let validator = validator.to_string();
        let value = value.describe();
        let message = format!("failed validating {} with {}.", value, validator);

        Self {
            base: ValidatorError::build(ErrorKind::Validation, validator, message, context),
            value,
        }
    }

    /// Returns the display form of the value that failed validation.
    pub fn value(&self) -> &str {
        &self.value
    }
}

validator_error_common!(ValidationError, ErrorKind::Validation);

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidatorError<'static>>();
    assert_sync::<ValidatorError<'static>>();
    assert_send::<DecodeError<'static>>();
    assert_sync::<DecodeError<'static>>();
    assert_send::<EncodeError<'static>>();
    assert_sync::<EncodeError<'static>>();
    assert_send::<ValidationError<'static>>();
    assert_sync::<ValidationError<'static>>();
};
