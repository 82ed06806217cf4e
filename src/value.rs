//! Recursive tagged-union value type.
//!
//! This module provides [`Value`], a closed sum type that lets the
//! persistent collections nest inside one another: an array slot can hold a
//! map whose values hold lists, and so on to any depth.
//!
//! `Value` carries no algorithms of its own. Its nested collection payloads
//! obey the immutability and structural-sharing guarantees of their own
//! components, so cloning any variant is cheap (a handle copy for the
//! collection variants).
//!
//! Nested values form a strict DAG built bottom-up: a collection is only
//! ever referenced by values created after it, so no reference cycle can
//! form and plain reference counting reclaims unreachable nodes.
//!
//! # Examples
//!
//! ```rust
//! use strata::persistent::{AvlMap, TrieArray};
//! use strata::value::Value;
//!
//! let scores = TrieArray::from_values([Some(Value::Int(10)), None, Some(Value::Int(30))]);
//! let document = AvlMap::new()
//!     .insert("name".to_string(), Value::from("alice"))
//!     .insert("scores".to_string(), Value::from(scores));
//!
//! match document.get("scores") {
//!     Some(Value::Array(array)) => assert_eq!(array.len(), 3),
//!     _ => panic!("scores should be an array"),
//! }
//! ```

use std::fmt;

use crate::persistent::{AvlMap, PathList, TrieArray};

/// A dynamically-shaped value with static type safety.
///
/// Instead of erasing types behind `Any`, a value is wrapped in the
/// matching variant of a closed enum, so every consumer is forced by the
/// compiler to handle all cases exhaustively and nested structures stay
/// fully typed.
///
/// The collection variants hold persistent collections of `Value`, with
/// optional slots in [`Array`](Value::Array) and [`List`](Value::List)
/// permitting explicitly empty cells.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double-precision float.
    Double(f64),
    /// A string.
    String(String),
    /// A boolean.
    Boolean(bool),
    /// A persistent array of values; slots may be empty.
    Array(TrieArray<Self>),
    /// A persistent ordered map from string keys to values.
    Map(AvlMap<String, Self>),
    /// A persistent list of values; slots may be empty.
    List(PathList<Self>),
}

impl Value {
    /// Name of the active variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::List(_) => "list",
        }
    }

    /// Returns the integer if this is an [`Int`](Value::Int).
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Double`](Value::Double).
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the array if this is an [`Array`](Value::Array).
    #[must_use]
    pub const fn as_array(&self) -> Option<&TrieArray<Self>> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the map if this is a [`Map`](Value::Map).
    #[must_use]
    pub const fn as_map(&self) -> Option<&AvlMap<String, Self>> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the list if this is a [`List`](Value::List).
    #[must_use]
    pub const fn as_list(&self) -> Option<&PathList<Self>> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<TrieArray<Self>> for Value {
    #[inline]
    fn from(value: TrieArray<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<AvlMap<String, Self>> for Value {
    #[inline]
    fn from(value: AvlMap<String, Self>) -> Self {
        Self::Map(value)
    }
}

impl From<PathList<Self>> for Value {
    #[inline]
    fn from(value: PathList<Self>) -> Self {
        Self::List(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Double(value) => write!(formatter, "{value}"),
            Self::String(value) => write!(formatter, "{value:?}"),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Array(array) => write!(formatter, "{array}"),
            Self::List(list) => write!(formatter, "{list}"),
            Self::Map(map) => {
                write!(formatter, "{{")?;
                let mut first = true;
                for (key, value) in map.iter() {
                    if first {
                        first = false;
                    } else {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key:?}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}
