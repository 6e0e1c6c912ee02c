//! # strata-core — Foundational Values for Type Definitions
//!
//! This crate is the leaf of the strata workspace. It defines the values
//! that type definitions operate on and the outcomes they produce. It
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One value domain.** [`Value`] is the only runtime value a type ever
//!    sees. It is totally ordered and hashable so it can key maps.
//!
//! 2. **Primitives are descriptors, not Rust types.** [`Primitive`] names
//!    what a type accepts and answers `is_instance` for any `Value`,
//!    including user-defined class hierarchies.
//!
//! 3. **Immutable annotations.** [`OptionMap`] is copy-on-write; the empty
//!    map is a single shared allocation.
//!
//! 4. **Failures are values.** [`TypeResult`] carries either the accepted
//!    value or the rejected input with a normalized [`CoercionError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `strata-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod options;
pub mod primitive;
pub mod result;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{CoercionError, ConstraintError, TypeError};
pub use options::OptionMap;
pub use primitive::{ClassName, Primitive};
pub use result::{Failure, Success, TypeResult};
pub use value::{Instance, Symbol, Value};
