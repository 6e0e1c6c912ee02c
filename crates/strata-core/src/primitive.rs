//! # Primitive Descriptors
//!
//! A [`Primitive`] identifies the runtime type a type definition accepts.
//! The built-in primitives form a small hierarchy:
//!
//! ```text
//! Any ─┬─ Nil
//!      ├─ Bool
//!      ├─ Numeric ─┬─ Integer
//!      │           └─ Float
//!      ├─ String
//!      ├─ Symbol
//!      ├─ Array
//!      ├─ Hash
//!      └─ Class(name)   user-defined, matched against instance ancestry
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;
use crate::value::Value;

/// A validated user-defined class name, e.g. `Point` or `Geo::Point`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(Arc<str>);

impl ClassName {
    /// Validate and create a class name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidClassName` if the name is empty, does not
    /// start with a letter, contains characters other than ASCII letters,
    /// digits, `_`, and `::` namespace separators, or is the name of a
    /// built-in primitive. Built-in names always decode to the built-in, so
    /// a class by that name could not survive an AST round trip.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TypeError> {
        let name = name.as_ref();
        let starts_with_letter = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        let segments_ok = name.split("::").all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
        let builtin = Primitive::BUILTINS.iter().any(|p| p.name() == name);
        if !starts_with_letter || !segments_ok || builtin {
            return Err(TypeError::InvalidClassName(name.to_string()));
        }
        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The runtime type a type definition is defined to accept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    /// Top of the hierarchy; every value is an instance.
    Any,
    Nil,
    Bool,
    /// Integers and floats.
    Numeric,
    Integer,
    Float,
    String,
    Symbol,
    /// The ordered-sequence primitive.
    Array,
    /// The key-value-map primitive.
    Hash,
    /// A user-defined class.
    Class(ClassName),
}

impl Primitive {
    /// Every built-in primitive, in hierarchy order.
    pub const BUILTINS: [Primitive; 10] = [
        Primitive::Any,
        Primitive::Nil,
        Primitive::Bool,
        Primitive::Numeric,
        Primitive::Integer,
        Primitive::Float,
        Primitive::String,
        Primitive::Symbol,
        Primitive::Array,
        Primitive::Hash,
    ];

    /// Display name of the primitive.
    pub fn name(&self) -> &str {
        match self {
            Self::Any => "Any",
            Self::Nil => "Nil",
            Self::Bool => "Bool",
            Self::Numeric => "Numeric",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Symbol => "Symbol",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::Class(class) => class.as_str(),
        }
    }

    /// Resolve a primitive by name. Names that are not built-in resolve to
    /// a user-defined class.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidClassName` for names that are neither
    /// built-in nor a valid class name.
    pub fn from_name(name: &str) -> Result<Self, TypeError> {
        match Self::BUILTINS.iter().find(|p| p.name() == name) {
            Some(builtin) => Ok(builtin.clone()),
            None => ClassName::new(name).map(Self::Class),
        }
    }

    /// Shorthand for a user-defined class primitive.
    pub fn class(name: impl AsRef<str>) -> Result<Self, TypeError> {
        ClassName::new(name).map(Self::Class)
    }

    /// The primitive of `value`'s runtime type. Objects map to their own
    /// class, not to an ancestor.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Nil => Self::Nil,
            Value::Bool(_) => Self::Bool,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Symbol(_) => Self::Symbol,
            Value::Array(_) => Self::Array,
            Value::Hash(_) => Self::Hash,
            Value::Object(instance) => Self::Class(instance.class().clone()),
        }
    }

    /// Whether `value`'s runtime type is this primitive or a subtype of it.
    pub fn is_instance(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Class(class), Value::Object(instance)) => instance.is_a(class),
            _ => Self::of(value).is_subtype_of(self),
        }
    }

    /// Whether this primitive is `other` or lies below it in the hierarchy.
    pub fn is_subtype_of(&self, other: &Primitive) -> bool {
        self == other
            || matches!(other, Self::Any)
            || matches!((self, other), (Self::Integer | Self::Float, Self::Numeric))
    }

    /// Whether this is the ordered-sequence primitive.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Array)
    }

    /// Whether this is the key-value-map primitive.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Hash)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Primitive {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Primitive {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Instance;

    #[test]
    fn class_name_validation() {
        assert!(ClassName::new("Point").is_ok());
        assert!(ClassName::new("Geo::Point").is_ok());
        assert!(ClassName::new("Point_3d").is_ok());
        assert!(ClassName::new("").is_err());
        assert!(ClassName::new("3d").is_err());
        assert!(ClassName::new("Geo::").is_err());
        assert!(ClassName::new("has space").is_err());
    }

    #[test]
    fn class_names_cannot_shadow_builtins() {
        for p in Primitive::BUILTINS.iter() {
            assert!(
                matches!(ClassName::new(p.name()), Err(TypeError::InvalidClassName(_))),
                "{p} accepted as a class name"
            );
            assert!(Primitive::class(p.name()).is_err());
        }
        assert!(ClassName::new("Integers").is_ok());
        assert!(ClassName::new("Geo::Integer").is_ok());
    }

    #[test]
    fn runtime_primitive_of_values() {
        assert_eq!(Primitive::of(&Value::from(1)), Primitive::Integer);
        assert_eq!(Primitive::of(&Value::from(1.5)), Primitive::Float);
        assert_eq!(Primitive::of(&Value::Nil), Primitive::Nil);
        let circle = Instance::new(ClassName::new("Circle").unwrap())
            .with_ancestor(ClassName::new("Shape").unwrap());
        assert_eq!(Primitive::of(&Value::from(circle)), Primitive::class("Circle").unwrap());
    }

    #[test]
    fn objects_are_not_builtin_instances() {
        let circle = Value::from(Instance::new(ClassName::new("Circle").unwrap()));
        assert!(Primitive::Any.is_instance(&circle));
        assert!(!Primitive::Hash.is_instance(&circle));
        assert!(!Primitive::class("Circle").unwrap().is_instance(&Value::from(1)));
    }

    #[test]
    fn from_name_resolves_builtins_first() {
        assert_eq!(Primitive::from_name("Integer").unwrap(), Primitive::Integer);
        assert_eq!(Primitive::from_name("Hash").unwrap(), Primitive::Hash);
        assert_eq!(
            Primitive::from_name("Money").unwrap(),
            Primitive::Class(ClassName::new("Money").unwrap())
        );
        assert!(Primitive::from_name("not a class").is_err());
    }

    #[test]
    fn builtin_names_round_trip() {
        for p in Primitive::BUILTINS.iter() {
            assert_eq!(&p.name().parse::<Primitive>().unwrap(), p);
        }
    }

    #[test]
    fn numeric_accepts_integers_and_floats() {
        assert!(Primitive::Numeric.is_instance(&Value::from(1)));
        assert!(Primitive::Numeric.is_instance(&Value::from(1.5)));
        assert!(!Primitive::Numeric.is_instance(&Value::from("1")));
        assert!(!Primitive::Integer.is_instance(&Value::from(1.5)));
    }

    #[test]
    fn any_accepts_everything() {
        assert!(Primitive::Any.is_instance(&Value::Nil));
        assert!(Primitive::Any.is_instance(&Value::symbol("x")));
    }

    #[test]
    fn class_matches_instance_ancestry() {
        let shape = Primitive::class("Shape").unwrap();
        let circle = Instance::new(ClassName::new("Circle").unwrap())
            .with_ancestor(ClassName::new("Shape").unwrap());
        assert!(shape.is_instance(&Value::from(circle)));
        assert!(!shape.is_instance(&Value::from("Shape")));
    }

    #[test]
    fn subtype_relation() {
        assert!(Primitive::Integer.is_subtype_of(&Primitive::Numeric));
        assert!(Primitive::Integer.is_subtype_of(&Primitive::Any));
        assert!(Primitive::Integer.is_subtype_of(&Primitive::Integer));
        assert!(!Primitive::Numeric.is_subtype_of(&Primitive::Integer));
        assert!(!Primitive::String.is_subtype_of(&Primitive::Numeric));
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&Primitive::Integer).unwrap();
        assert_eq!(json, r#""Integer""#);
        let back: Primitive = serde_json::from_str(r#""Money""#).unwrap();
        assert_eq!(back.name(), "Money");
    }
}
