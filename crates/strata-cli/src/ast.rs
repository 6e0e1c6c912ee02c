//! # AST Subcommand
//!
//! Prints the AST of the type built for a primitive.
//!
//! ```bash
//! strata ast Integer --meta doc='"age in years"'
//! strata ast Hash --no-meta
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;

use strata_core::{OptionMap, Value};
use strata_types::{AnyType, Type};

use crate::parse_primitive;

/// Arguments for the ast subcommand.
#[derive(Args, Debug)]
pub struct AstArgs {
    /// Primitive name (e.g. Integer, String, Array, or a class name).
    pub primitive: String,

    /// Meta entry as key=value. The value is parsed as JSON and falls back
    /// to a plain string. Repeatable.
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,

    /// Export with an empty meta map.
    #[arg(long)]
    pub no_meta: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the ast subcommand.
pub fn run_ast(args: &AstArgs) -> Result<u8> {
    let primitive = parse_primitive(&args.primitive)?;
    let mut meta = OptionMap::new();
    for pair in &args.meta {
        let (key, value) = parse_meta_pair(pair)?;
        meta = meta.set(key, value);
    }

    let t = AnyType::build_with(primitive, OptionMap::new(), meta);
    tracing::debug!(kind = %t.kind(), name = %t.name(), "built type");

    let json = t.to_ast(!args.no_meta).to_json();
    let text = if args.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    println!("{text}");
    Ok(0)
}

/// Split `key=value`, parsing the value as JSON when possible.
pub fn parse_meta_pair(pair: &str) -> Result<(&str, Value)> {
    let (key, raw) = pair
        .split_once('=')
        .with_context(|| format!("meta entry '{pair}' must have the form key=value"))?;
    if key.is_empty() {
        bail!("meta entry '{pair}' has an empty key");
    }
    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(raw),
    };
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_values_parse_as_json() {
        assert_eq!(parse_meta_pair("n=3").unwrap(), ("n", Value::from(3)));
        assert_eq!(parse_meta_pair("flag=true").unwrap(), ("flag", Value::from(true)));
        assert_eq!(
            parse_meta_pair(r#"doc="quoted""#).unwrap(),
            ("doc", Value::from("quoted"))
        );
    }

    #[test]
    fn meta_values_fall_back_to_strings() {
        assert_eq!(parse_meta_pair("doc=age in years").unwrap(), ("doc", Value::from("age in years")));
        assert_eq!(parse_meta_pair("empty=").unwrap(), ("empty", Value::from("")));
    }

    #[test]
    fn meta_pair_errors() {
        assert!(parse_meta_pair("novalue").is_err());
        assert!(parse_meta_pair("=1").is_err());
    }
}
