//! # AST Compiler
//!
//! Rebuilds type definitions from their [`Ast`]. Nominal nodes go through
//! the dispatch table, so `["nominal", ["Array", {}]]` compiles to an
//! [`ArrayType`](crate::array::ArrayType), not a plain nominal.
//!
//! Compiling the AST of a type yields an equal type whenever the AST
//! carries everything the type holds. Nominal nodes do not carry options,
//! so options on non-hash types are not restored.

use serde_json::Value as Json;

use strata_core::{OptionMap, TypeError};

use crate::array::ArrayType;
use crate::ast::Ast;
use crate::dispatch::AnyType;
use crate::hash::HashType;

/// Build the type described by `ast`.
pub fn compile(ast: &Ast) -> AnyType {
    tracing::trace!(tag = ast.tag(), "compiling AST node");
    match ast {
        Ast::Nominal { primitive, meta } => {
            AnyType::build_with(primitive.clone(), OptionMap::new(), meta.clone())
        }
        Ast::Array { member, meta } => ArrayType::new().of(compile(member)).with_meta(meta).into(),
        Ast::Hash { options, meta } => HashType::new()
            .with_options(options)
            .with_meta(meta)
            .into(),
        Ast::Map { key, value, meta } => HashType::new()
            .map(compile(key), compile(value))
            .with_meta(meta)
            .into(),
    }
}

/// Decode and compile a JSON AST document.
///
/// # Errors
///
/// Returns the decoding error from [`Ast::from_json`].
pub fn compile_json(json: &Json) -> Result<AnyType, TypeError> {
    let ast = Ast::from_json(json)?;
    let compiled = compile(&ast);
    tracing::debug!(kind = %compiled.kind(), "compiled type from AST");
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Type;
    use crate::dispatch::TypeKind;
    use crate::nominal::Nominal;
    use strata_core::{Primitive, Value};

    #[test]
    fn nominal_round_trip() {
        let t = Nominal::new(Primitive::Integer).with_meta(&OptionMap::new().set("doc", "age"));
        assert_eq!(compile(&t.ast()), AnyType::Nominal(t));
    }

    #[test]
    fn nominal_array_node_routes_to_array_type() {
        let compiled = compile(&Nominal::new(Primitive::Array).ast());
        assert_eq!(compiled.kind(), TypeKind::Array);
        assert_eq!(compiled, AnyType::Array(ArrayType::new()));
    }

    #[test]
    fn container_round_trips() {
        let member = ArrayType::new()
            .of(Nominal::new(Primitive::String))
            .with_meta(&OptionMap::new().set("doc", "tags"));
        assert_eq!(compile(&member.ast()), AnyType::ArrayMember(member));

        let hash = HashType::new().with_options(&OptionMap::new().set("strict", true));
        assert_eq!(compile(&hash.ast()), AnyType::Hash(hash.clone()));

        let map = hash.map(Nominal::new(Primitive::Symbol), Nominal::new(Primitive::Any));
        let compiled = compile(&map.ast());
        assert_eq!(compiled.kind(), TypeKind::Map);
        assert_eq!(compiled.ast(), map.ast());
    }

    #[test]
    fn compile_json_documents() {
        let json = serde_json::json!(["array", [["nominal", ["Integer", {}]], {}]]);
        let compiled = compile_json(&json).unwrap();
        assert_eq!(compiled.kind(), TypeKind::ArrayMember);
        assert!(compiled.is_valid(&Value::Array(vec![Value::from(1)])));

        assert!(compile_json(&serde_json::json!(["nope", []])).is_err());
    }
}
