//! # strata-types — The Type Contract and Its Base Case
//!
//! Defines the uniform contract every strata type satisfies and the
//! nominal identity type that is its base case.
//!
//! ## Modules
//!
//! - **Contract** (`contract.rs`): the [`Type`] trait, i.e. `call`,
//!   `try_coerce`, `try_or_else`, `is_primitive`, `is_valid`, `coerce`,
//!   and `to_ast`, plus the capability flags.
//!
//! - **Nominal** (`nominal.rs`): [`Nominal`], the unconstrained type over a
//!   primitive. `call` is the identity, `try_coerce` always succeeds, and
//!   `coerce` verifies the primitive.
//!
//! - **Dispatch** (`dispatch.rs`): construction-time routing of the array
//!   and hash primitives to [`ArrayType`] and [`HashType`], and the closed
//!   set [`AnyType`].
//!
//! - **Containers** (`array.rs`, `hash.rs`, `map.rs`): the specialized
//!   types and their member/key/value variants.
//!
//! - **AST** (`ast.rs`, `compiler.rs`): the portable `[tag, payload]`
//!   encoding and its inverse.
//!
//! - **Compatibility** (`compat.rs`): the deprecated `Definition` name.
//!
//! ## Crate Policy
//!
//! - Depends only on `strata-core` internally.
//! - Type definitions are immutable; derived types are new values.
//! - Equality of a type is equality of its primitive, options, meta, and
//!   (for containers) member types. Nothing else participates.

pub mod array;
pub mod ast;
pub mod compat;
pub mod compiler;
pub mod contract;
pub mod dispatch;
pub mod hash;
pub mod map;
pub mod nominal;

pub use array::{ArrayMember, ArrayType};
pub use ast::Ast;
pub use compat::{lookup_type, Deprecations};
pub use compiler::{compile, compile_json};
pub use contract::Type;
pub use dispatch::{dispatch, AnyType, TypeKind};
pub use hash::HashType;
pub use map::MapType;
pub use nominal::Nominal;
