//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout strata. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `ConstraintError` is the only error a type raises on its own: `coerce`
//!   returns it when an input is not an instance of the expected primitive.
//! - `CoercionError` is the normalized error stored inside a
//!   [`Failure`](crate::result::Failure). Every raw error descriptor passes
//!   through [`CoercionError::normalize`] before it is stored.
//! - `TypeError` is the umbrella error for fallible construction paths
//!   (class names, AST decoding, serialization).

use thiserror::Error;

use crate::options::OptionMap;
use crate::primitive::Primitive;
use crate::value::Value;

/// Top-level error type for strata.
#[derive(Error, Debug)]
pub enum TypeError {
    /// An input did not satisfy a type's primitive.
    #[error("constraint error: {0}")]
    Constraint(#[from] ConstraintError),

    /// A coercion attempt failed.
    #[error("coercion error: {0}")]
    Coercion(#[from] CoercionError),

    /// A class name was empty or contained illegal characters.
    #[error("invalid class name {0:?}: must start with a letter, contain only letters, digits, '_' or '::', and not name a built-in primitive")]
    InvalidClassName(String),

    /// An AST document could not be decoded.
    #[error("malformed AST: {0}")]
    Ast(String),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raised by `coerce` when the input's runtime type does not match the
/// type's primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct ConstraintError {
    message: String,
    input: Value,
}

impl ConstraintError {
    /// Build the error for an input that is not an instance of `primitive`.
    ///
    /// The message has the form `<input-repr> must be an instance of <name>`.
    pub fn not_an_instance(input: Value, primitive: &Primitive) -> Self {
        let message = format!("{} must be an instance of {}", input.inspect(), primitive.name());
        Self { message, input }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rejected input.
    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Consume the error and return the rejected input.
    pub fn into_input(self) -> Value {
        self.input
    }
}

/// The normalized error carried by a `Failure` result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct CoercionError {
    message: String,
    meta: OptionMap,
    errors: Vec<CoercionError>,
}

impl CoercionError {
    /// Create an error with a message and empty meta.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_meta(message, OptionMap::new())
    }

    /// Create an error carrying annotations, e.g. the failing key of a map.
    pub fn with_meta(message: impl Into<String>, meta: OptionMap) -> Self {
        Self {
            message: message.into(),
            meta,
            errors: Vec::new(),
        }
    }

    /// Normalize any supported error descriptor into a `CoercionError`.
    ///
    /// Accepts an already-normalized `CoercionError` (returned as is), a
    /// `ConstraintError`, or a raw message.
    pub fn normalize(error: impl Into<CoercionError>) -> Self {
        error.into()
    }

    /// Normalize an arbitrary error value.
    ///
    /// Errors that already are `CoercionError`s keep their meta; everything
    /// else is reduced to its `Display` message.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        match error.downcast_ref::<CoercionError>() {
            Some(coercion) => coercion.clone(),
            None => Self::new(error.to_string()),
        }
    }

    /// Combine several element failures into one error.
    ///
    /// The message joins the element messages; each element error is kept,
    /// meta included, and is available through [`errors`](Self::errors).
    pub fn multiple(errors: impl IntoIterator<Item = CoercionError>) -> Self {
        let errors: Vec<CoercionError> = errors.into_iter().collect();
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            message,
            meta: OptionMap::new(),
            errors,
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Annotations attached to the error.
    pub fn meta(&self) -> &OptionMap {
        &self.meta
    }

    /// The element errors combined by [`multiple`](Self::multiple); empty
    /// for a single error.
    pub fn errors(&self) -> &[CoercionError] {
        &self.errors
    }
}

impl From<&str> for CoercionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for CoercionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<ConstraintError> for CoercionError {
    fn from(error: ConstraintError) -> Self {
        Self::new(error.message)
    }
}
