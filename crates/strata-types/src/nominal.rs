//! # Nominal Type — The Unconstrained Identity Type
//!
//! [`Nominal`] is the base case of the type contract: "values that must be
//! instances of `primitive`".
//!
//! ## Semantics
//!
//! - `call` trusts its input and returns it unchanged.
//! - `try_coerce` always succeeds and `is_valid` is always `true`.
//!   Validation is a layered concern.
//! - `coerce` is the one fallible operation: it checks the primitive and
//!   raises `ConstraintError` on mismatch.
//!
//! ## Equality
//!
//! Two nominals are equal iff their primitive, options, and meta are equal.
//! Nothing else participates in `PartialEq` or `Hash`.
//!
//! ## Immutability
//!
//! Fields are private and never reassigned. Builder methods (`with_option`,
//! `with_options`, `with_meta`, `pristine`) return new instances.

use strata_core::{ConstraintError, OptionMap, Primitive, Symbol, TypeResult, Value};

use crate::ast::Ast;
use crate::contract::{exported_meta, Type};

/// The identity type over a primitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nominal {
    primitive: Primitive,
    options: OptionMap,
    meta: OptionMap,
}

impl Nominal {
    /// Create a nominal type with empty options and meta.
    pub fn new(primitive: Primitive) -> Self {
        Self::from_parts(primitive, OptionMap::new(), OptionMap::new())
    }

    pub fn from_parts(primitive: Primitive, options: OptionMap, meta: OptionMap) -> Self {
        Self {
            primitive,
            options,
            meta,
        }
    }

    /// A copy with one option set.
    pub fn with_option(&self, key: impl Into<Symbol>, value: impl Into<Value>) -> Self {
        Self::from_parts(
            self.primitive.clone(),
            self.options.set(key, value),
            self.meta.clone(),
        )
    }

    /// A copy with `options` merged over the current options.
    pub fn with_options(&self, options: &OptionMap) -> Self {
        Self::from_parts(
            self.primitive.clone(),
            self.options.merge(options),
            self.meta.clone(),
        )
    }

    /// A copy with `meta` merged over the current meta.
    pub fn with_meta(&self, meta: &OptionMap) -> Self {
        Self::from_parts(
            self.primitive.clone(),
            self.options.clone(),
            self.meta.merge(meta),
        )
    }

    /// A copy without meta.
    pub fn pristine(&self) -> Self {
        Self::from_parts(self.primitive.clone(), self.options.clone(), OptionMap::new())
    }
}

impl Type for Nominal {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn options(&self) -> &OptionMap {
        &self.options
    }

    fn meta(&self) -> &OptionMap {
        &self.meta
    }

    fn call(&self, input: Value) -> Value {
        input
    }

    fn try_coerce(&self, input: Value) -> TypeResult {
        self.success(input)
    }

    fn is_valid(&self, _value: &Value) -> bool {
        true
    }

    fn coerce(&self, input: Value) -> Result<Value, ConstraintError> {
        if self.is_primitive(&input) {
            Ok(input)
        } else {
            Err(ConstraintError::not_an_instance(input, &self.primitive))
        }
    }

    fn to_ast(&self, include_meta: bool) -> Ast {
        Ast::Nominal {
            primitive: self.primitive.clone(),
            meta: exported_meta(&self.meta, include_meta),
        }
    }
}
