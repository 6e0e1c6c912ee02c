//! # Lookup Subcommand
//!
//! Resolves a type constant name to the kind of type it denotes. Legacy
//! names still resolve but log a one-time deprecation warning.

use anyhow::Result;
use clap::Args;

use strata_types::{lookup_type, TypeKind};

/// Arguments for the lookup subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Constant name (e.g. Nominal, Array::Member, Definition).
    pub name: String,
}

/// Execute the lookup subcommand. Exits with 1 for unknown names.
pub fn run_lookup(args: &LookupArgs) -> Result<u8> {
    match resolve(&args.name) {
        Some(kind) => {
            println!("{} => {kind}", args.name);
            Ok(0)
        }
        None => {
            tracing::error!(name = %args.name, "unknown type constant");
            Ok(1)
        }
    }
}

fn resolve(name: &str) -> Option<TypeKind> {
    lookup_type(name.trim())
}
