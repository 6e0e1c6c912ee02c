//! # The Type Contract
//!
//! Every type definition in strata implements [`Type`]: the nominal base
//! case, the array and hash specializations, and anything layered on top.
//!
//! ## Operations
//!
//! | Operation | Fails? | Meaning |
//! |-----------|--------|---------|
//! | `call` | never | apply the type to an input |
//! | `try_coerce` | never | attempt a coercion, reporting the outcome as a [`TypeResult`] |
//! | `try_or_else` | never | `try_coerce`, routing a `Failure` through a callback |
//! | `is_primitive` | never | is the input an instance of the primitive |
//! | `is_valid` | never | would the input be accepted |
//! | `coerce` | `ConstraintError` | verify membership, returning the input |
//! | `to_ast` | never | portable description of the type |
//!
//! Types with real failure paths override `try_coerce`. `try_or_else` is a
//! provided method and is not meant to be overridden: it invokes the
//! callback if and only if `try_coerce` produced a `Failure`.

use std::fmt;

use strata_core::{
    CoercionError, ConstraintError, Failure, OptionMap, Primitive, TypeResult, Value,
};

use crate::ast::Ast;

/// The uniform call/try/coerce contract.
pub trait Type: fmt::Debug + Send + Sync {
    /// The primitive this type is defined over.
    fn primitive(&self) -> &Primitive;

    /// Construction-time configuration.
    fn options(&self) -> &OptionMap;

    /// Descriptive annotations.
    fn meta(&self) -> &OptionMap;

    /// Display name of the type.
    fn name(&self) -> String {
        self.primitive().name().to_string()
    }

    fn is_default(&self) -> bool {
        false
    }

    fn is_constrained(&self) -> bool {
        false
    }

    fn is_optional(&self) -> bool {
        false
    }

    /// Apply the type to `input`.
    fn call(&self, input: Value) -> Value;

    /// Attempt a coercion without raising.
    fn try_coerce(&self, input: Value) -> TypeResult;

    /// Attempt a coercion; a `Failure` is handed to `on_failure` and its
    /// return value becomes the outcome.
    fn try_or_else(
        &self,
        input: Value,
        on_failure: &mut dyn FnMut(Failure) -> TypeResult,
    ) -> TypeResult {
        match self.try_coerce(input) {
            TypeResult::Failure(failure) => on_failure(failure),
            success => success,
        }
    }

    /// Whether `value` is an instance of the primitive (or a subtype).
    fn is_primitive(&self, value: &Value) -> bool {
        self.primitive().is_instance(value)
    }

    /// Whether `value` would be accepted by this type.
    fn is_valid(&self, value: &Value) -> bool;

    /// Case-style containment check; same as `is_valid`.
    fn matches(&self, value: &Value) -> bool {
        self.is_valid(value)
    }

    /// Verify that `input` belongs to the type.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintError` when the input is rejected.
    fn coerce(&self, input: Value) -> Result<Value, ConstraintError>;

    /// Wrap `input` as a success.
    fn success(&self, input: Value) -> TypeResult {
        TypeResult::success(input)
    }

    /// Wrap `input` and a normalized error as a failure.
    fn failure<E>(&self, input: Value, error: E) -> TypeResult
    where
        Self: Sized,
        E: Into<CoercionError>,
    {
        TypeResult::failure(input, error)
    }

    /// AST representation; meta is replaced by an empty map unless
    /// `include_meta` is set.
    fn to_ast(&self, include_meta: bool) -> Ast;

    /// AST representation including meta.
    fn ast(&self) -> Ast {
        self.to_ast(true)
    }
}

/// Meta as exported into an AST.
pub(crate) fn exported_meta(meta: &OptionMap, include_meta: bool) -> OptionMap {
    if include_meta {
        meta.clone()
    } else {
        OptionMap::new()
    }
}
