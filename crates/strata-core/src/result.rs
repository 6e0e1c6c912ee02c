//! # Result Algebra — Success and Failure
//!
//! The outcome of a non-throwing coercion attempt. A [`TypeResult`] is
//! exactly one of:
//!
//! - [`Success`] — holds the accepted (possibly coerced) value.
//! - [`Failure`] — holds the original input and a normalized
//!   [`CoercionError`].
//!
//! Results are plain values: they carry no hidden state and compare equal
//! iff they are the same variant with the same payload.

use thiserror::Error;

use crate::error::CoercionError;
use crate::value::Value;

/// A successful coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Success {
    value: Value,
}

impl Success {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The accepted value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A failed coercion: the rejected input and why it was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{error}")]
pub struct Failure {
    input: Value,
    error: CoercionError,
}

impl Failure {
    /// Create a failure. `error` is normalized into a `CoercionError`.
    pub fn new(input: Value, error: impl Into<CoercionError>) -> Self {
        Self {
            input,
            error: CoercionError::normalize(error),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &Value {
        &self.input
    }

    pub fn error(&self) -> &CoercionError {
        &self.error
    }

    pub fn into_parts(self) -> (Value, CoercionError) {
        (self.input, self.error)
    }
}

/// Outcome of a `try` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeResult {
    Success(Success),
    Failure(Failure),
}

impl TypeResult {
    pub fn success(value: Value) -> Self {
        TypeResult::Success(Success::new(value))
    }

    pub fn failure(input: Value, error: impl Into<CoercionError>) -> Self {
        TypeResult::Failure(Failure::new(input, error))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TypeResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TypeResult::Failure(_))
    }

    /// The underlying value: the accepted value on success, the rejected
    /// input on failure.
    pub fn input(&self) -> &Value {
        match self {
            TypeResult::Success(s) => s.value(),
            TypeResult::Failure(f) => f.input(),
        }
    }

    pub fn into_input(self) -> Value {
        match self {
            TypeResult::Success(s) => s.into_value(),
            TypeResult::Failure(f) => f.input,
        }
    }

    /// The error of a failure; `None` on success.
    pub fn error(&self) -> Option<&CoercionError> {
        match self {
            TypeResult::Success(_) => None,
            TypeResult::Failure(f) => Some(f.error()),
        }
    }

    /// Transform the value of a success. Failures pass through untouched.
    pub fn map(self, f: impl FnOnce(Value) -> Value) -> Self {
        match self {
            TypeResult::Success(s) => TypeResult::success(f(s.into_value())),
            failure => failure,
        }
    }

    /// Recover from a failure. Successes pass through untouched.
    pub fn or_else(self, f: impl FnOnce(Failure) -> TypeResult) -> Self {
        match self {
            TypeResult::Failure(failure) => f(failure),
            success => success,
        }
    }

    /// Convert into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<Value, Failure> {
        match self {
            TypeResult::Success(s) => Ok(s.into_value()),
            TypeResult::Failure(f) => Err(f),
        }
    }
}

impl From<Success> for TypeResult {
    fn from(success: Success) -> Self {
        TypeResult::Success(success)
    }
}

impl From<Failure> for TypeResult {
    fn from(failure: Failure) -> Self {
        TypeResult::Failure(failure)
    }
}
