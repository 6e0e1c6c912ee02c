//! # Array Types
//!
//! [`ArrayType`] is what the dispatch table produces for the
//! ordered-sequence primitive. On its own it behaves exactly like a
//! nominal type; [`ArrayType::of`] adds a member type and yields an
//! [`ArrayMember`], which applies the member type to every element.

use strata_core::{CoercionError, ConstraintError, OptionMap, Primitive, TypeResult, Value};

use crate::ast::Ast;
use crate::contract::{exported_meta, Type};
use crate::dispatch::AnyType;
use crate::nominal::Nominal;

/// The nominal type over `Array`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    nominal: Nominal,
}

impl ArrayType {
    pub fn new() -> Self {
        Self::from_nominal(Nominal::new(Primitive::Array))
    }

    pub(crate) fn from_nominal(nominal: Nominal) -> Self {
        Self { nominal }
    }

    pub fn nominal(&self) -> &Nominal {
        &self.nominal
    }

    /// An array type whose elements must satisfy `member`.
    pub fn of(&self, member: impl Into<AnyType>) -> ArrayMember {
        ArrayMember {
            nominal: self.nominal.clone(),
            member: Box::new(member.into()),
        }
    }

    pub fn with_meta(&self, meta: &OptionMap) -> Self {
        Self::from_nominal(self.nominal.with_meta(meta))
    }
}

impl Default for ArrayType {
    fn default() -> Self {
        Self::new()
    }
}

impl Type for ArrayType {
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
        self.nominal.to_ast(include_meta)
    }
}

/// An array type with a member type applied to each element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayMember {
    nominal: Nominal,
    member: Box<AnyType>,
}

impl ArrayMember {
    pub fn member(&self) -> &AnyType {
        &self.member
    }

    pub fn with_meta(&self, meta: &OptionMap) -> Self {
        Self {
            nominal: self.nominal.with_meta(meta),
            member: self.member.clone(),
        }
    }
}

impl Type for ArrayMember {
    fn primitive(&self) -> &Primitive {
        self.nominal.primitive()
    }

    fn options(&self) -> &OptionMap {
        self.nominal.options()
    }

    fn meta(&self) -> &OptionMap {
        self.nominal.meta()
    }

    /// Applies the member type to each element; non-arrays pass through.
    fn call(&self, input: Value) -> Value {
        match input {
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|item| self.member.call(item)).collect())
            }
            other => other,
        }
    }

    fn try_coerce(&self, input: Value) -> TypeResult {
        let Value::Array(items) = &input else {
            let message = format!("{} is not an array", input.inspect());
            return self.failure(input, message);
        };

        let mut output = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.member.try_coerce(item.clone()) {
                TypeResult::Success(s) => output.push(s.into_value()),
                TypeResult::Failure(f) => {
                    let (_, error) = f.into_parts();
                    let meta = error.meta().set("index", index as i64);
                    errors.push(CoercionError::with_meta(error.message(), meta));
                }
            }
        }

        if errors.is_empty() {
            self.success(Value::Array(output))
        } else {
            self.failure(input, CoercionError::multiple(errors))
        }
    }

    fn is_valid(&self, value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| self.member.is_valid(item)))
    }

    fn coerce(&self, input: Value) -> Result<Value, ConstraintError> {
        if !self.is_primitive(&input) {
            return Err(ConstraintError::not_an_instance(input, self.primitive()));
        }
        match input {
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.member.coerce(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => Ok(other),
        }
    }

    fn to_ast(&self, include_meta: bool) -> Ast {
        Ast::Array {
            member: Box::new(self.member.to_ast(include_meta)),
            meta: exported_meta(self.nominal.meta(), include_meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Failure;

    fn integers() -> ArrayMember {
        ArrayType::new().of(Nominal::new(Primitive::Integer))
    }

    fn ints(values: &[i64]) -> Value {
        Value::Array(values.iter().copied().map(Value::from).collect())
    }

    #[test]
    fn bare_array_type_is_nominal() {
        let t = ArrayType::new();
        assert_eq!(t.name(), "Array");
        assert_eq!(t.call(Value::from(1)), Value::from(1));
        assert!(t.try_coerce(Value::from(1)).is_success());
        assert_eq!(t.ast(), Nominal::new(Primitive::Array).ast());
        assert!(t.coerce(Value::from("x")).is_err());
    }

    #[test]
    fn member_call_maps_elements() {
        assert_eq!(integers().call(ints(&[1, 2])), ints(&[1, 2]));
        assert_eq!(integers().call(Value::from("raw")), Value::from("raw"));
    }

    #[test]
    fn member_try_rejects_non_arrays() {
        let mut called = false;
        let result = integers().try_or_else(Value::from(1), &mut |f: Failure| {
            called = true;
            TypeResult::Failure(f)
        });
        assert!(called);
        assert_eq!(result.error().unwrap().message(), "1 is not an array");
        assert_eq!(result.input(), &Value::from(1));
    }

    #[test]
    fn member_coerce_checks_elements() {
        assert_eq!(integers().coerce(ints(&[3])).unwrap(), ints(&[3]));

        let mixed = Value::Array(vec![Value::from(1), Value::from("2")]);
        let err = integers().coerce(mixed).unwrap_err();
        assert_eq!(err.message(), r#""2" must be an instance of Integer"#);

        let err = integers().coerce(Value::from("x")).unwrap_err();
        assert_eq!(err.message(), r#""x" must be an instance of Array"#);
    }

    #[test]
    fn member_validity() {
        assert!(integers().is_valid(&ints(&[1, 2, 3])));
        assert!(!integers().is_valid(&Value::from(1)));
    }

    #[test]
    fn nested_member_failures_are_collected() {
        let nested = ArrayType::new().of(integers());
        let input = Value::Array(vec![Value::from(1), ints(&[2])]);
        let result = nested.try_coerce(input.clone());
        assert!(result.is_failure());
        assert_eq!(result.input(), &input);
        assert_eq!(result.error().unwrap().message(), "1 is not an array");
    }

    #[test]
    fn element_failures_carry_their_index() {
        let nested = ArrayType::new().of(integers());
        let result = nested.try_coerce(Value::Array(vec![ints(&[]), Value::from(7)]));
        let error = result.error().unwrap();
        assert_eq!(error.message(), "7 is not an array");
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].meta().get("index"), Some(&Value::from(1)));
    }

    #[test]
    fn member_ast() {
        let t = integers().with_meta(&OptionMap::new().set("doc", "ids"));
        assert_eq!(
            t.to_ast(false),
            Ast::Array {
                member: Box::new(Nominal::new(Primitive::Integer).ast()),
                meta: OptionMap::new(),
            }
        );
        assert_eq!(t.ast().meta().get("doc"), Some(&Value::from("ids")));
    }
}
