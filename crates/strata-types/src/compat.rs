//! # Compatibility — Legacy Type Names
//!
//! The nominal type used to be called `Definition`. The old name still
//! resolves, both as a Rust alias and through [`lookup_type`], but using it
//! emits a deprecation notice.
//!
//! Notices go to `tracing` at `WARN` under the `strata::deprecations`
//! target, at most once per process for each legacy name. The emit-once
//! state lives in [`Deprecations`], outside the type definitions, so the
//! types themselves stay free of side effects.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::dispatch::TypeKind;
use crate::nominal::Nominal;

/// Legacy name of [`Nominal`].
#[deprecated(since = "0.1.0", note = "use `Nominal` instead")]
pub type Definition = Nominal;

/// The legacy constant name resolved by [`lookup_type`].
pub const LEGACY_NOMINAL_NAME: &str = "Definition";

static DEPRECATIONS: Deprecations = Deprecations::new();

/// Emit-once state for deprecation notices.
#[derive(Debug)]
pub struct Deprecations {
    definition: AtomicBool,
}

impl Deprecations {
    pub const fn new() -> Self {
        Self {
            definition: AtomicBool::new(false),
        }
    }

    /// Resolve a type constant name, warning on legacy names.
    pub fn lookup(&self, name: &str) -> Option<TypeKind> {
        match name {
            "Nominal" => Some(TypeKind::Nominal),
            "Array" => Some(TypeKind::Array),
            "Array::Member" => Some(TypeKind::ArrayMember),
            "Hash" => Some(TypeKind::Hash),
            "Map" => Some(TypeKind::Map),
            LEGACY_NOMINAL_NAME => {
                self.warn_definition();
                Some(TypeKind::Nominal)
            }
            _ => None,
        }
    }

    /// Whether the `Definition` notice has been emitted.
    pub fn definition_warned(&self) -> bool {
        self.definition.load(Ordering::Relaxed)
    }

    fn warn_definition(&self) {
        if self.definition.swap(true, Ordering::Relaxed) {
            return;
        }
        tracing::warn!(
            target: "strata::deprecations",
            constant = LEGACY_NOMINAL_NAME,
            replacement = "Nominal",
            "Definition is deprecated and will be removed in the next major version; use Nominal instead"
        );
    }
}

impl Default for Deprecations {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a type constant name using the process-wide deprecation state.
pub fn lookup_type(name: &str) -> Option<TypeKind> {
    DEPRECATIONS.lookup(name)
}

/// The process-wide deprecation state.
pub fn deprecations() -> &'static Deprecations {
    &DEPRECATIONS
}
