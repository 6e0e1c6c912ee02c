//! # Compile Subcommand
//!
//! Rebuilds a type from an AST document and prints what it compiled to.
//!
//! ```bash
//! strata compile '["map", [["nominal", ["String", {}]], ["nominal", ["Integer", {}]], {}]]'
//! ```

use anyhow::{Context, Result};
use clap::Args;

use strata_types::{compile_json, AnyType, Type};

/// Arguments for the compile subcommand.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// AST document as JSON.
    pub ast: String,
}

/// Execute the compile subcommand.
pub fn run_compile(args: &CompileArgs) -> Result<u8> {
    let json: serde_json::Value =
        serde_json::from_str(&args.ast).context("AST argument is not valid JSON")?;
    let compiled = compile_json(&json).context("failed to compile AST")?;
    print!("{}", describe(&compiled)?);
    Ok(0)
}

/// Kind, name, and re-exported AST of a compiled type.
pub fn describe(t: &AnyType) -> Result<String> {
    let ast = serde_json::to_string(&t.ast().to_json())?;
    Ok(format!("kind: {}\nname: {}\nast:  {ast}\n", t.kind(), t.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describes_compiled_map() {
        let doc = json!(["map", [["nominal", ["String", {}]], ["nominal", ["Integer", {}]], {}]]);
        let t = compile_json(&doc).unwrap();
        let text = describe(&t).unwrap();
        assert!(text.starts_with("kind: Map\nname: Hash\n"));
        assert!(text.contains(r#"ast:  ["map",[["nominal",["String",{}]],["nominal",["Integer",{}]],{}]]"#));
    }

    #[test]
    fn nominal_array_compiles_to_array_type() {
        let t = compile_json(&json!(["nominal", ["Array", {}]])).unwrap();
        assert!(describe(&t).unwrap().starts_with("kind: Array\n"));
    }

    #[test]
    fn malformed_ast_is_an_error() {
        let args = CompileArgs { ast: r#"["sum", []]"#.into() };
        assert!(run_compile(&args).is_err());
        let args = CompileArgs { ast: "not json".into() };
        assert!(run_compile(&args).is_err());
    }
}
