//! # strata-cli — Type Inspection Command-Line Interface
//!
//! A clap-based front end over `strata-types`.
//!
//! ## Subcommands
//!
//! - `ast` — Export the AST of a nominal (or dispatched) type
//! - `check` — Run `call`, `try`, `valid`, `primitive`, and `coerce` against a JSON input
//! - `lookup` — Resolve a type constant name, including legacy names
//! - `compile` — Rebuild a type from an AST document
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `strata-types`; rendering is kept in
//!   pure functions so it can be tested without a terminal.

pub mod ast;
pub mod check;
pub mod compile;
pub mod lookup;

use anyhow::{Context, Result};
use strata_core::Primitive;

/// Parse a primitive name given on the command line.
pub fn parse_primitive(name: &str) -> Result<Primitive> {
    Primitive::from_name(name).with_context(|| format!("invalid primitive name '{name}'"))
}
