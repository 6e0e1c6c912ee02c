//! # strata CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use strata_cli::ast::{run_ast, AstArgs};
use strata_cli::check::{run_check, CheckArgs};
use strata_cli::compile::{run_compile, CompileArgs};
use strata_cli::lookup::{run_lookup, LookupArgs};

/// Strata type inspection CLI
///
/// Builds nominal, array, and hash types, exports and compiles their ASTs,
/// and checks values against the type contract.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the AST of the type for a primitive.
    Ast(AstArgs),

    /// Check a JSON value against a type.
    Check(CheckArgs),

    /// Resolve a type constant name.
    Lookup(LookupArgs),

    /// Compile an AST document back into a type.
    Compile(CompileArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "strata CLI starting");

    let result = match cli.command {
        Commands::Ast(args) => run_ast(&args),
        Commands::Check(args) => run_check(&args),
        Commands::Lookup(args) => run_lookup(&args),
        Commands::Compile(args) => run_compile(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_ast_with_meta() {
        let cli = Cli::try_parse_from([
            "strata", "ast", "Integer", "--meta", "doc=age", "--meta", "n=1",
        ])
        .unwrap();
        if let Commands::Ast(args) = cli.command {
            assert_eq!(args.primitive, "Integer");
            assert_eq!(args.meta, vec!["doc=age", "n=1"]);
            assert!(!args.no_meta);
        } else {
            panic!("expected ast subcommand");
        }
    }

    #[test]
    fn cli_parse_check_requires_a_type() {
        assert!(Cli::try_parse_from(["strata", "check", "5"]).is_err());
        assert!(Cli::try_parse_from(["strata", "check", "--type", "Integer", "--ast", "[]", "5"]).is_err());

        let cli = Cli::try_parse_from(["strata", "check", "--type", "Integer", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn cli_parse_global_verbosity() {
        let cli = Cli::try_parse_from(["strata", "-vv", "lookup", "Nominal"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let cli = Cli::try_parse_from(["strata", "lookup", "Nominal", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn cli_parse_compile() {
        let cli = Cli::try_parse_from(["strata", "compile", r#"["nominal", ["Integer", {}]]"#]).unwrap();
        assert!(matches!(cli.command, Commands::Compile(_)));
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["strata", "frobnicate"]).is_err());
    }
}
