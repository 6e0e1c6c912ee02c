//! # AST — Portable Type Descriptions
//!
//! [`Ast`] is the tagged encoding of a type used to move type definitions
//! between processes. Its JSON form is a `[tag, payload]` pair:
//!
//! ```text
//! ["nominal", [primitive, meta]]
//! ["array",   [member, meta]]
//! ["hash",    [options, meta]]
//! ["map",     [key, value, meta]]
//! ```
//!
//! Primitives encode as their names and option maps as JSON objects.
//!
//! ## Stability
//!
//! Consumers pattern-match on `(tag, payload)`. New fields extend the end
//! of a payload; existing positions never change meaning. Decoding accepts
//! payloads longer than the known arity and ignores the extra trailing
//! entries.
//!
//! Meta survives the JSON trip only as JSON values: symbols come back as
//! strings and hash keys as string keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value as Json};

use strata_core::{OptionMap, Primitive, TypeError, Value};

/// A portable description of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
    Nominal { primitive: Primitive, meta: OptionMap },
    Array { member: Box<Ast>, meta: OptionMap },
    Hash { options: OptionMap, meta: OptionMap },
    Map { key: Box<Ast>, value: Box<Ast>, meta: OptionMap },
}

impl Ast {
    pub const NOMINAL: &'static str = "nominal";
    pub const ARRAY: &'static str = "array";
    pub const HASH: &'static str = "hash";
    pub const MAP: &'static str = "map";

    /// The node's discriminator.
    pub fn tag(&self) -> &'static str {
        match self {
            Ast::Nominal { .. } => Self::NOMINAL,
            Ast::Array { .. } => Self::ARRAY,
            Ast::Hash { .. } => Self::HASH,
            Ast::Map { .. } => Self::MAP,
        }
    }

    /// The node's own meta.
    pub fn meta(&self) -> &OptionMap {
        match self {
            Ast::Nominal { meta, .. }
            | Ast::Array { meta, .. }
            | Ast::Hash { meta, .. }
            | Ast::Map { meta, .. } => meta,
        }
    }

    /// Encode as `[tag, payload]`.
    pub fn to_json(&self) -> Json {
        let payload = match self {
            Ast::Nominal { primitive, meta } => json!([primitive.name(), meta.to_json()]),
            Ast::Array { member, meta } => json!([member.to_json(), meta.to_json()]),
            Ast::Hash { options, meta } => json!([options.to_json(), meta.to_json()]),
            Ast::Map { key, value, meta } => {
                json!([key.to_json(), value.to_json(), meta.to_json()])
            }
        };
        json!([self.tag(), payload])
    }

    /// Decode a `[tag, payload]` document.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::Ast` for unknown tags, payloads shorter than the
    /// tag's arity, or entries of the wrong JSON shape, and
    /// `TypeError::InvalidClassName` for unusable primitive names.
    pub fn from_json(json: &Json) -> Result<Self, TypeError> {
        let node = json
            .as_array()
            .filter(|node| node.len() == 2)
            .ok_or_else(|| TypeError::Ast(format!("expected [tag, payload], got {json}")))?;
        let tag = node[0]
            .as_str()
            .ok_or_else(|| TypeError::Ast(format!("tag must be a string, got {}", node[0])))?;
        let payload = node[1]
            .as_array()
            .ok_or_else(|| TypeError::Ast(format!("payload of {tag:?} must be an array")))?;

        let arity = match tag {
            Self::NOMINAL | Self::ARRAY | Self::HASH => 2,
            Self::MAP => 3,
            other => return Err(TypeError::Ast(format!("unknown tag {other:?}"))),
        };
        if payload.len() < arity {
            return Err(TypeError::Ast(format!(
                "payload of {tag:?} needs {arity} entries, got {}",
                payload.len()
            )));
        }

        match tag {
            Self::NOMINAL => {
                let name = payload[0].as_str().ok_or_else(|| {
                    TypeError::Ast(format!("primitive must be a name, got {}", payload[0]))
                })?;
                Ok(Ast::Nominal {
                    primitive: Primitive::from_name(name)?,
                    meta: option_map(&payload[1])?,
                })
            }
            Self::ARRAY => Ok(Ast::Array {
                member: Box::new(Self::from_json(&payload[0])?),
                meta: option_map(&payload[1])?,
            }),
            Self::HASH => Ok(Ast::Hash {
                options: option_map(&payload[0])?,
                meta: option_map(&payload[1])?,
            }),
            _ => Ok(Ast::Map {
                key: Box::new(Self::from_json(&payload[0])?),
                value: Box::new(Self::from_json(&payload[1])?),
                meta: option_map(&payload[2])?,
            }),
        }
    }

    /// Parse an AST from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::Serialization` for invalid JSON, otherwise as
    /// [`Ast::from_json`].
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        let json: Json = serde_json::from_str(text)?;
        Self::from_json(&json)
    }
}

fn option_map(json: &Json) -> Result<OptionMap, TypeError> {
    let object = json
        .as_object()
        .ok_or_else(|| TypeError::Ast(format!("expected an object, got {json}")))?;
    Ok(OptionMap::from_pairs(
        object
            .iter()
            .map(|(k, v)| (k.as_str(), Value::from(v.clone()))),
    ))
}

impl Serialize for Ast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ast {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        Self::from_json(&json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer() -> Ast {
        Ast::Nominal {
            primitive: Primitive::Integer,
            meta: OptionMap::new(),
        }
    }

    #[test]
    fn nominal_encoding() {
        let ast = Ast::Nominal {
            primitive: Primitive::Integer,
            meta: OptionMap::new().set("doc", "age"),
        };
        assert_eq!(ast.tag(), "nominal");
        assert_eq!(ast.to_json(), json!(["nominal", ["Integer", {"doc": "age"}]]));
    }

    #[test]
    fn nested_encoding() {
        let ast = Ast::Map {
            key: Box::new(Ast::Nominal {
                primitive: Primitive::String,
                meta: OptionMap::new(),
            }),
            value: Box::new(Ast::Array {
                member: Box::new(integer()),
                meta: OptionMap::new(),
            }),
            meta: OptionMap::new(),
        };
        assert_eq!(
            ast.to_json(),
            json!([
                "map",
                [
                    ["nominal", ["String", {}]],
                    ["array", [["nominal", ["Integer", {}]], {}]],
                    {}
                ]
            ])
        );
        assert_eq!(Ast::from_json(&ast.to_json()).unwrap(), ast);
    }

    #[test]
    fn hash_encoding_carries_options() {
        let ast = Ast::Hash {
            options: OptionMap::new().set("strict", true),
            meta: OptionMap::new(),
        };
        assert_eq!(ast.to_json(), json!(["hash", [{"strict": true}, {}]]));
    }

    #[test]
    fn decode_user_class() {
        let ast = Ast::parse(r#"["nominal", ["Geo::Point", {"srid": 4326}]]"#).unwrap();
        match ast {
            Ast::Nominal { primitive, meta } => {
                assert_eq!(primitive.name(), "Geo::Point");
                assert_eq!(meta.get("srid"), Some(&Value::from(4326)));
            }
            other => panic!("expected nominal, got {other:?}"),
        }
    }

    #[test]
    fn decode_ignores_trailing_payload_entries() {
        let ast = Ast::parse(r#"["nominal", ["Integer", {}, "future"]]"#).unwrap();
        assert_eq!(ast, integer());
    }

    #[test]
    fn decode_rejects_malformed_documents() {
        for text in [
            r#"["nominal"]"#,
            r#"["widget", ["Integer", {}]]"#,
            r#"["nominal", ["Integer"]]"#,
            r#"["nominal", [5, {}]]"#,
            r#"["nominal", ["Integer", []]]"#,
            r#"{"nominal": []}"#,
        ] {
            assert!(
                matches!(Ast::parse(text), Err(TypeError::Ast(_))),
                "should reject {text}"
            );
        }
        assert!(matches!(
            Ast::parse(r#"["nominal", ["no good", {}]]"#),
            Err(TypeError::InvalidClassName(_))
        ));
        assert!(matches!(Ast::parse("["), Err(TypeError::Serialization(_))));
    }

    #[test]
    fn serde_uses_same_shape() {
        let text = serde_json::to_string(&integer()).unwrap();
        assert_eq!(text, r#"["nominal",["Integer",{}]]"#);
        let back: Ast = serde_json::from_str(&text).unwrap();
        assert_eq!(back, integer());
    }
}
