//! # Map Types
//!
//! A [`MapType`] is a hash type with a key type and a value type. Every
//! entry is checked: a failing key or value is reported with the offending
//! key in the error's meta.

use std::collections::BTreeMap;

use strata_core::{CoercionError, ConstraintError, OptionMap, Primitive, TypeResult, Value};

use crate::ast::Ast;
use crate::contract::{exported_meta, Type};
use crate::dispatch::AnyType;
use crate::nominal::Nominal;

/// A hash type with typed keys and values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapType {
    nominal: Nominal,
    key_type: Box<AnyType>,
    value_type: Box<AnyType>,
}

impl MapType {
    pub(crate) fn new(nominal: Nominal, key_type: AnyType, value_type: AnyType) -> Self {
        Self {
            nominal,
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        }
    }

    pub fn key_type(&self) -> &AnyType {
        &self.key_type
    }

    pub fn value_type(&self) -> &AnyType {
        &self.value_type
    }

    pub fn with_meta(&self, meta: &OptionMap) -> Self {
        Self {
            nominal: self.nominal.with_meta(meta),
            key_type: self.key_type.clone(),
            value_type: self.value_type.clone(),
        }
    }

    fn entry_error(key: &Value, message: String, error: &CoercionError) -> CoercionError {
        CoercionError::with_meta(message, error.meta().set("key", key.clone()))
    }
}

impl Type for MapType {
    fn primitive(&self) -> &Primitive {
        self.nominal.primitive()
    }

    fn options(&self) -> &OptionMap {
        self.nominal.options()
    }

    fn meta(&self) -> &OptionMap {
        self.nominal.meta()
    }

    /// Applies the key and value types to every entry; non-hashes pass
    /// through.
    fn call(&self, input: Value) -> Value {
        match input {
            Value::Hash(map) => Value::Hash(
                map.into_iter()
                    .map(|(k, v)| (self.key_type.call(k), self.value_type.call(v)))
                    .collect(),
            ),
            other => other,
        }
    }

    fn try_coerce(&self, input: Value) -> TypeResult {
        let Value::Hash(map) = &input else {
            let message = format!("{} is not a hash", input.inspect());
            return self.failure(input, message);
        };

        let mut output = BTreeMap::new();
        let mut errors = Vec::new();
        for (key, value) in map {
            let key_result = self.key_type.try_coerce(key.clone());
            let value_result = self.value_type.try_coerce(value.clone());
            match (key_result, value_result) {
                (TypeResult::Success(k), TypeResult::Success(v)) => {
                    output.insert(k.into_value(), v.into_value());
                }
                (TypeResult::Failure(f), _) => {
                    let message = format!("input key {} is invalid: {}", key.inspect(), f.error());
                    errors.push(Self::entry_error(key, message, f.error()));
                }
                (_, TypeResult::Failure(f)) => {
                    let message = format!(
                        "input value {} for key {} is invalid: {}",
                        value.inspect(),
                        key.inspect(),
                        f.error()
                    );
                    errors.push(Self::entry_error(key, message, f.error()));
                }
            }
        }

        if errors.is_empty() {
            self.success(Value::Hash(output))
        } else {
            self.failure(input, CoercionError::multiple(errors))
        }
    }

    fn is_valid(&self, value: &Value) -> bool {
        value.as_hash().is_some_and(|map| {
            map.iter()
                .all(|(k, v)| self.key_type.is_valid(k) && self.value_type.is_valid(v))
        })
    }

    fn coerce(&self, input: Value) -> Result<Value, ConstraintError> {
        if !self.is_primitive(&input) {
            return Err(ConstraintError::not_an_instance(input, self.primitive()));
        }
        match input {
            Value::Hash(map) => {
                let mut output = BTreeMap::new();
                for (k, v) in map {
                    output.insert(self.key_type.coerce(k)?, self.value_type.coerce(v)?);
                }
                Ok(Value::Hash(output))
            }
            other => Ok(other),
        }
    }

    fn to_ast(&self, include_meta: bool) -> Ast {
        Ast::Map {
            key: Box::new(self.key_type.to_ast(include_meta)),
            value: Box::new(self.value_type.to_ast(include_meta)),
            meta: exported_meta(self.nominal.meta(), include_meta),
        }
    }
}
