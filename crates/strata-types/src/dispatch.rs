//! # Dispatch Table — Construction-Time Specialization
//!
//! Building a type from a primitive goes through [`dispatch`]: the
//! ordered-sequence primitive routes to [`ArrayType`], the key-value-map
//! primitive to [`HashType`], and everything else to the plain
//! [`Nominal`]. Downstream combinators never have to ask "is this an array
//! type" because construction already chose the specialization.
//!
//! [`AnyType`] is the closed set of type definitions in this crate. It
//! implements the [`Type`] contract by delegating to the variant it holds.

use std::fmt;

use strata_core::{ConstraintError, Failure, OptionMap, Primitive, TypeResult, Value};

use crate::array::{ArrayMember, ArrayType};
use crate::ast::Ast;
use crate::contract::Type;
use crate::hash::HashType;
use crate::map::MapType;
use crate::nominal::Nominal;

/// Which type definition a construction request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Nominal,
    Array,
    ArrayMember,
    Hash,
    Map,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nominal => "Nominal",
            Self::Array => "Array",
            Self::ArrayMember => "Array::Member",
            Self::Hash => "Hash",
            Self::Map => "Map",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the type definition for a primitive.
pub fn dispatch(primitive: &Primitive) -> TypeKind {
    if primitive.is_sequence() {
        TypeKind::Array
    } else if primitive.is_map() {
        TypeKind::Hash
    } else {
        TypeKind::Nominal
    }
}

/// Any type definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyType {
    Nominal(Nominal),
    Array(ArrayType),
    ArrayMember(ArrayMember),
    Hash(HashType),
    Map(MapType),
}

impl AnyType {
    /// Build the routed type for `primitive` with empty options and meta.
    pub fn build(primitive: Primitive) -> Self {
        Self::build_with(primitive, OptionMap::new(), OptionMap::new())
    }

    /// Build the routed type for `primitive`.
    pub fn build_with(primitive: Primitive, options: OptionMap, meta: OptionMap) -> Self {
        let kind = dispatch(&primitive);
        let nominal = Nominal::from_parts(primitive, options, meta);
        match kind {
            TypeKind::Array => AnyType::Array(ArrayType::from_nominal(nominal)),
            TypeKind::Hash => AnyType::Hash(HashType::from_nominal(nominal)),
            _ => AnyType::Nominal(nominal),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            AnyType::Nominal(_) => TypeKind::Nominal,
            AnyType::Array(_) => TypeKind::Array,
            AnyType::ArrayMember(_) => TypeKind::ArrayMember,
            AnyType::Hash(_) => TypeKind::Hash,
            AnyType::Map(_) => TypeKind::Map,
        }
    }

    pub fn as_nominal(&self) -> Option<&Nominal> {
        match self {
            AnyType::Nominal(nominal) => Some(nominal),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Type {
        match self {
            AnyType::Nominal(t) => t,
            AnyType::Array(t) => t,
            AnyType::ArrayMember(t) => t,
            AnyType::Hash(t) => t,
            AnyType::Map(t) => t,
        }
    }
}

impl From<Nominal> for AnyType {
    fn from(t: Nominal) -> Self {
        AnyType::Nominal(t)
    }
}

impl From<ArrayType> for AnyType {
    fn from(t: ArrayType) -> Self {
        AnyType::Array(t)
    }
}

impl From<ArrayMember> for AnyType {
    fn from(t: ArrayMember) -> Self {
        AnyType::ArrayMember(t)
    }
}

impl From<HashType> for AnyType {
    fn from(t: HashType) -> Self {
        AnyType::Hash(t)
    }
}

impl From<MapType> for AnyType {
    fn from(t: MapType) -> Self {
        AnyType::Map(t)
    }
}

impl Type for AnyType {
    fn primitive(&self) -> &Primitive {
        self.inner().primitive()
    }

    fn options(&self) -> &OptionMap {
        self.inner().options()
    }

    fn meta(&self) -> &OptionMap {
        self.inner().meta()
    }

    fn name(&self) -> String {
        self.inner().name()
    }

    fn is_default(&self) -> bool {
        self.inner().is_default()
    }

    fn is_constrained(&self) -> bool {
        self.inner().is_constrained()
    }

    fn is_optional(&self) -> bool {
        self.inner().is_optional()
    }

    fn call(&self, input: Value) -> Value {
        self.inner().call(input)
    }

    fn try_coerce(&self, input: Value) -> TypeResult {
        self.inner().try_coerce(input)
    }

    fn try_or_else(
        &self,
        input: Value,
        on_failure: &mut dyn FnMut(Failure) -> TypeResult,
    ) -> TypeResult {
        self.inner().try_or_else(input, on_failure)
    }

    fn is_valid(&self, value: &Value) -> bool {
        self.inner().is_valid(value)
    }

    fn coerce(&self, input: Value) -> Result<Value, ConstraintError> {
        self.inner().coerce(input)
    }

    fn to_ast(&self, include_meta: bool) -> Ast {
        self.inner().to_ast(include_meta)
    }
}
