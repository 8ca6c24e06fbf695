//! Raw values stored in command tokens and passed to command constructors.

use crate::command::Condition;
use serde::Serialize;
use std::borrow::Cow;

/// A raw, pre-formatting value.
///
/// Tokens keep values in this form until render time, when the token's
/// formatter decides how each variant is written into the statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Record id, e.g. `#12:0`.
    Rid(String),
    List(Vec<Value>),
    /// Key/value pair, used by update-style tokens.
    Entry { key: String, value: Box<Value> },
    /// One entry of a WHERE accumulator.
    Condition(Condition),
}

impl Value {
    /// Create a record id value.
    pub fn rid(rid: impl Into<String>) -> Self {
        Value::Rid(rid.into())
    }

    /// Create a key/value entry.
    pub fn entry(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Entry {
            key: key.into(),
            value: Box::new(value.into()),
        }
    }

    /// Textual form of a scalar value.
    ///
    /// Returns `None` for null, lists, entries and conditions.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) | Value::Rid(s) => Some(Cow::Borrowed(s)),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::List(_) | Value::Entry { .. } | Value::Condition(_) => None,
        }
    }

    /// Integer form of the value, parsing text if needed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Condition> for Value {
    fn from(value: Condition) -> Self {
        Value::Condition(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Positional arguments handed to a command constructor by the registry.
///
/// Accessors are lenient: a missing or mistyped argument reads as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Value>);

impl Args {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument.
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.0.push(value.into());
        self
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scalar argument as text; empty strings read as absent.
    pub fn text(&self, index: usize) -> Option<String> {
        self.get(index)
            .and_then(Value::as_text)
            .filter(|s| !s.is_empty())
            .map(Cow::into_owned)
    }

    /// List argument; a scalar reads as a one-element list.
    pub fn list(&self, index: usize) -> Vec<Value> {
        match self.get(index) {
            Some(Value::List(values)) => values.clone(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![other.clone()],
        }
    }

    /// Boolean argument; anything but `true` reads as `false`.
    pub fn flag(&self, index: usize) -> bool {
        self.get(index).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Boolean argument with a default for when it is missing.
    pub fn flag_or(&self, index: usize, default: bool) -> bool {
        self.get(index).and_then(Value::as_bool).unwrap_or(default)
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Args(values)
    }
}

impl<T: Into<Value>> FromIterator<T> for Args {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Args(iter.into_iter().map(Into::into).collect())
    }
}

/// Build an [`Args`] list from heterogeneous values.
///
/// ```ignore
/// let args = orient_query::args!["dictionary", "luke", Value::rid("#12:0")];
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::Value::from($value)),+])
    };
}
