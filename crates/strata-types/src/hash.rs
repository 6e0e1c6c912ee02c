//! # Hash Types
//!
//! [`HashType`] is what the dispatch table produces for the key-value-map
//! primitive. It accepts inputs like a nominal type and exports its options
//! in the AST; [`HashType::map`] yields a [`MapType`](crate::map::MapType)
//! with typed keys and values.

use strata_core::{ConstraintError, OptionMap, Primitive, TypeResult, Value};

use crate::ast::Ast;
use crate::contract::{exported_meta, Type};
use crate::dispatch::AnyType;
use crate::map::MapType;
use crate::nominal::Nominal;

/// The nominal type over `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashType {
    nominal: Nominal,
}

impl HashType {
    pub fn new() -> Self {
        Self::from_nominal(Nominal::new(Primitive::Hash))
    }

    pub(crate) fn from_nominal(nominal: Nominal) -> Self {
        Self { nominal }
    }

    pub fn nominal(&self) -> &Nominal {
        &self.nominal
    }

    /// A map type whose keys satisfy `key_type` and values `value_type`.
    pub fn map(&self, key_type: impl Into<AnyType>, value_type: impl Into<AnyType>) -> MapType {
        MapType::new(self.nominal.clone(), key_type.into(), value_type.into())
    }

    pub fn with_options(&self, options: &OptionMap) -> Self {
        Self::from_nominal(self.nominal.with_options(options))
    }

    pub fn with_meta(&self, meta: &OptionMap) -> Self {
        Self::from_nominal(self.nominal.with_meta(meta))
    }
}

impl Default for HashType {
    fn default() -> Self {
        Self::new()
    }
}

impl Type for HashType {
    fn primitive(&self) -> &Primitive {
        self.nominal.primitive()
    }

    fn options(&self) -> &OptionMap {
        self.nominal.options()
    }

    fn meta(&self) -> &OptionMap {
        self.nominal.meta()
    }

    fn call(&self, input: Value) -> Value {
        self.nominal.call(input)
    }

    fn try_coerce(&self, input: Value) -> TypeResult {
        self.nominal.try_coerce(input)
    }

    fn is_valid(&self, value: &Value) -> bool {
        self.nominal.is_valid(value)
    }

    fn coerce(&self, input: Value) -> Result<Value, ConstraintError> {
        self.nominal.coerce(input)
    }

    fn to_ast(&self, include_meta: bool) -> Ast {
        Ast::Hash {
            options: self.nominal.options().clone(),
            meta: exported_meta(self.nominal.meta(), include_meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_nominal() {
        let t = HashType::new();
        assert_eq!(t.name(), "Hash");
        assert_eq!(t.call(Value::from(1)), Value::from(1));
        assert!(t.try_coerce(Value::from(1)).is_success());
        assert!(t.is_valid(&Value::Nil));
        assert!(t.coerce(Value::Hash(Default::default())).is_ok());
        assert_eq!(
            t.coerce(Value::from(1)).unwrap_err().message(),
            "1 must be an instance of Hash"
        );
    }

    #[test]
    fn ast_keeps_options_and_drops_meta_on_request() {
        let t = HashType::new()
            .with_options(&OptionMap::new().set("strict", true))
            .with_meta(&OptionMap::new().set("doc", "payload"));
        assert_eq!(
            t.to_ast(false),
            Ast::Hash {
                options: OptionMap::new().set("strict", true),
                meta: OptionMap::new(),
            }
        );
        assert_eq!(t.ast().meta().len(), 1);
    }
}
