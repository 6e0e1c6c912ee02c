//! # Check Subcommand
//!
//! Runs every contract operation of a type against one JSON input and
//! prints a report. Exits with status 1 when `coerce` rejects the input.
//!
//! ```bash
//! strata check --type Integer 5
//! strata check --type Integer '"5"'
//! strata check --ast '["array", [["nominal", ["Integer", {}]], {}]]' '[1, "2"]'
//! ```

use anyhow::{Context, Result};
use clap::Args;

use strata_core::{TypeResult, Value};
use strata_types::{compile_json, AnyType, Type};

use crate::parse_primitive;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Primitive name of the type to check against.
    #[arg(long = "type", value_name = "PRIMITIVE", conflicts_with = "ast", required_unless_present = "ast")]
    pub type_name: Option<String>,

    /// AST document (JSON) of the type to check against.
    #[arg(long)]
    pub ast: Option<String>,

    /// Input value as JSON.
    pub input: String,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let t = match (&args.type_name, &args.ast) {
        (Some(name), _) => AnyType::build(parse_primitive(name)?),
        (None, Some(text)) => {
            let json: serde_json::Value =
                serde_json::from_str(text).context("--ast is not valid JSON")?;
            compile_json(&json).context("--ast is not a valid type AST")?
        }
        (None, None) => anyhow::bail!("either --type or --ast is required"),
    };
    let input: serde_json::Value =
        serde_json::from_str(&args.input).context("input is not valid JSON")?;

    let (report, accepted) = render_report(&t, Value::from(input));
    print!("{report}");
    Ok(if accepted { 0 } else { 1 })
}

/// Render the contract report; the flag is whether `coerce` accepted.
pub fn render_report(t: &AnyType, input: Value) -> (String, bool) {
    let coerced = t.coerce(input.clone());
    let coerce_line = match &coerced {
        Ok(value) => value.inspect(),
        Err(err) => format!("error: {err}"),
    };

    let report = format!(
        "type:       {name} ({kind})\n\
         input:      {input} ({runtime})\n\
         call:       {call}\n\
         try:        {try_result}\n\
         valid:      {valid}\n\
         primitive:  {primitive}\n\
         coerce:     {coerce_line}\n",
        name = t.name(),
        kind = t.kind(),
        input = input.inspect(),
        runtime = input.type_name(),
        call = t.call(input.clone()).inspect(),
        try_result = describe(&t.try_coerce(input.clone())),
        valid = t.is_valid(&input),
        primitive = t.is_primitive(&input),
    );
    (report, coerced.is_ok())
}

fn describe(result: &TypeResult) -> String {
    match result {
        TypeResult::Success(s) => format!("success {}", s.value().inspect()),
        TypeResult::Failure(f) => format!("failure {} ({})", f.input().inspect(), f.error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Primitive;
    use strata_types::{ArrayType, Nominal};

    #[test]
    fn report_for_mismatched_integer() {
        let t = AnyType::build(Primitive::Integer);
        let (report, accepted) = render_report(&t, Value::from("5"));
        assert!(!accepted);
        assert!(report.contains("type:       Integer (Nominal)"));
        assert!(report.contains(r#"input:      "5" (String)"#));
        assert!(report.contains(r#"try:        success "5""#));
        assert!(report.contains("valid:      true"));
        assert!(report.contains("primitive:  false"));
        assert!(report.contains(r#"coerce:     error: "5" must be an instance of Integer"#));
    }

    #[test]
    fn report_for_accepted_value() {
        let t = AnyType::build(Primitive::Integer);
        let (report, accepted) = render_report(&t, Value::from(5));
        assert!(accepted);
        assert!(report.contains("coerce:     5"));
    }

    #[test]
    fn report_for_array_member_failure() {
        let t = AnyType::from(ArrayType::new().of(Nominal::new(Primitive::Integer)));
        let (report, accepted) = render_report(&t, Value::from(7));
        assert!(!accepted);
        assert!(report.contains("type:       Array (Array::Member)"));
        assert!(report.contains("try:        failure 7 (7 is not an array)"));
        assert!(report.contains("valid:      false"));
    }
}
