//! # Pipeline Data
//!
//! [`Data`] is the dynamically-typed value passed between pipeline stages.
//! Decoders accept it so that mis-wired pipelines fail with a typed error
//! instead of a panic.

use crate::{
    alloc::{string::String, vec::Vec},
    batch::TokenBatch,
};

/// A dynamically-typed pipeline value.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// A boolean.
    Bool(bool),

    /// An integer.
    Int(i64),

    /// A float.
    Float(f64),

    /// A string.
    String(String),

    /// A numeric array.
    Batch(TokenBatch),

    /// A list of values.
    List(Vec<Data>),
}

impl Data {
    /// Is this a [`Data::Batch`]?
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// A short name of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Batch(_) => "batch",
            Self::List(_) => "list",
        }
    }

    /// Borrow the string value, if this is a [`Data::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<TokenBatch> for Data {
    fn from(batch: TokenBatch) -> Self {
        Self::Batch(batch)
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<i64> for Data {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<D: Into<Data>> From<Vec<D>> for Data {
    fn from(values: Vec<D>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
