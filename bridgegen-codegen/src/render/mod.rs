//! Emission adapters.
//!
//! The engine hands an ordered list of [`Derived`] descriptors to an
//! emitter, which renders them into final source text plus an export
//! table. Downstream build systems may plug their own emitter; the
//! [`TextEmitter`] is the default implementation.

pub mod text;

pub use text::TextEmitter;

use crate::descriptor::Derived;

/// Renders derived descriptors into source text.
pub trait Emitter {
    /// Renders every declaration's descriptors plus the export table.
    fn emit(&self, derived: &[Derived]) -> String;
}
