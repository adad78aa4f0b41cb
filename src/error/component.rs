//! Errors in the shape of schema components.
//!
//! This module provides [`ComponentError`], raised when an attribute or item
//! of a schema component is not what the component expects, and
//! [`RefDescriptor`], which says what kind of reference was wrong.

use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};
use std::fmt::{self, Display};

use serde_json::Value;

use super::kind::{Classify, ErrorKind, GenericKind};
use crate::describe::quote;

/// What an offending reference points at.
///
/// The descriptor picks the phrase a [`ComponentError`] uses to name the
/// faulty part of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RefDescriptor {
    /// No reference: the named attribute itself is wrong.
    #[default]
    None,
    /// An item index inside the named attribute.
    Index(i64),
    /// A free-form key or detail about the named attribute.
    Key(String),
    /// The named attribute should be a mapping.
    MappingType,
    /// The named attribute should be a sequence.
    SequenceType,
    /// The named attribute should be an instance of some other type.
    OtherType(String),
}

impl RefDescriptor {
    /// Classifies an untyped reference.
    ///
    /// Integers become [`RefDescriptor::Index`], strings become
    /// [`RefDescriptor::Key`], anything else is [`RefDescriptor::None`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use xmlschema_errors::RefDescriptor;
    ///
    /// assert_eq!(RefDescriptor::classify(&json!(3)), RefDescriptor::Index(3));
    /// assert_eq!(RefDescriptor::classify(&json!("bad")), RefDescriptor::Key("bad".into()));
    /// assert_eq!(RefDescriptor::classify(&json!(1.5)), RefDescriptor::None);
    /// ```
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_i64().map_or(RefDescriptor::None, RefDescriptor::Index),
            Value::String(s) => RefDescriptor::Key(s.clone()),
            _ => RefDescriptor::None,
        }
    }

    /// Returns the descriptor of a container type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use xmlschema_errors::RefDescriptor;
    ///
    /// assert_eq!(RefDescriptor::of::<HashMap<String, i32>>(), RefDescriptor::MappingType);
    /// assert_eq!(RefDescriptor::of::<Vec<u8>>(), RefDescriptor::SequenceType);
    /// ```
    pub fn of<T: ShapedType + ?Sized>() -> Self {
        T::descriptor()
    }

    /// Returns an [`RefDescriptor::OtherType`] naming `T`.
    pub fn other_type<T: ?Sized>() -> Self {
        RefDescriptor::OtherType(std::any::type_name::<T>().to_string())
    }

    /// Returns the phrase naming the faulty part of attribute `name`.
    pub fn describe(&self, name: &str) -> String {
        let name = quote(name);
        match self {
            RefDescriptor::None => format!("attribute {name}"),
            RefDescriptor::Index(i) => format!("item {i} of {name}"),
            RefDescriptor::Key(key) => format!("{name}: {key}"),
            RefDescriptor::MappingType => format!("value of dictionary {name}"),
            RefDescriptor::SequenceType => format!("item of list {name}"),
            RefDescriptor::OtherType(ty) => format!("instance {name} of type {ty}"),
        }
    }
}

macro_rules! index_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RefDescriptor {
                fn from(i: $ty) -> Self {
                    RefDescriptor::Index(i64::from(i))
                }
            }
        )*
    };
}

index_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for RefDescriptor {
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or(RefDescriptor::None, RefDescriptor::Index)
    }
}

impl From<&str> for RefDescriptor {
    fn from(key: &str) -> Self {
        RefDescriptor::Key(key.to_string())
    }
}

impl From<String> for RefDescriptor {
    fn from(key: String) -> Self {
        RefDescriptor::Key(key)
    }
}

impl From<&Value> for RefDescriptor {
    fn from(value: &Value) -> Self {
        RefDescriptor::classify(value)
    }
}

impl<T: Into<RefDescriptor>> From<Option<T>> for RefDescriptor {
    fn from(reference: Option<T>) -> Self {
        reference.map_or(RefDescriptor::None, Into::into)
    }
}

/// Container types with a known shape.
pub trait ShapedType {
    /// Returns [`RefDescriptor::MappingType`] or [`RefDescriptor::SequenceType`].
    fn descriptor() -> RefDescriptor;
}

impl<K, V, S> ShapedType for HashMap<K, V, S> {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::MappingType
    }
}

impl<K, V> ShapedType for BTreeMap<K, V> {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::MappingType
    }
}

impl ShapedType for serde_json::Map<String, Value> {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::MappingType
    }
}

impl<T> ShapedType for Vec<T> {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::SequenceType
    }
}

impl<T> ShapedType for VecDeque<T> {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::SequenceType
    }
}

impl<T> ShapedType for LinkedList<T> {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::SequenceType
    }
}

impl<T> ShapedType for [T] {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::SequenceType
    }
}

impl<T, const N: usize> ShapedType for [T; N] {
    fn descriptor() -> RefDescriptor {
        RefDescriptor::SequenceType
    }
}

/// An error in an attribute or item of a schema component.
///
/// The description of the faulty part is computed once, from the attribute
/// name and the [`RefDescriptor`]. The rendered form is
/// `<component>: <description>: <message>`.
///
/// # Example
///
/// ```rust
/// use xmlschema_errors::ComponentError;
///
/// let error = ComponentError::new("XsdGroup(name='items')", "items", 3, "not an element");
///
/// assert_eq!(error.description(), "item 3 of 'items'");
/// assert_eq!(
///     error.to_string(),
///     "XsdGroup(name='items'): item 3 of 'items': not an element"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentError {
    obj: String,
    name: String,
    description: String,
    message: String,
}

impl ComponentError {
    /// Creates a component error.
    ///
    /// `obj` is the component that found the problem, `name` the attribute
    /// or item in question and `reference` what was wrong about it.
    pub fn new(
        obj: impl Display,
        name: impl Into<String>,
        reference: impl Into<RefDescriptor>,
        message: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let reference = reference.into();
        let description = reference.describe(&name);
        let obj = obj.to_string();

        tracing::debug!(
            component = %obj,
            attribute = %name,
            kind = %ErrorKind::Component,
            "schema component error"
        );

        Self {
            obj,
            name,
            description,
            message: message.into(),
        }
    }

    /// Returns the display form of the component.
    pub fn obj(&self) -> &str {
        &self.obj
    }

    /// Returns the attribute or item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phrase naming the faulty part.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.obj, self.description, self.message)
    }
}

impl std::error::Error for ComponentError {}

impl Classify for ComponentError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Component
    }

    fn generic_kind(&self) -> GenericKind {
        GenericKind::Value
    }
}
