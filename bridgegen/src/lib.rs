//! # Bridgegen
//!
//! Type-directed derivation of accessors and converters across the
//! typed/untyped boundary.
//!
//! Given a variant or record declaration annotated with a derivation
//! directive, bridgegen synthesizes:
//!
//! - **Accessors** - one exported binding per constructor or field
//! - **Converters** - a `toExternal` / `fromExternal` pair mapping the
//!   closed native type to open objects, integers or strings
//!
//! Constructor encodings are deterministic and overridable; reverse
//! enum conversion is partial (present/absent) unless the opaque mode
//! makes it total by provenance.
//!
//! ## Quick Start
//!
//! ```
//! use bridgegen::prelude::*;
//!
//! let fruit = TypeDeclaration::variant(
//!     "fruit",
//!     VariantDecl::new()
//!         .with(Constructor::new("Apple"))
//!         .with(Constructor::new("Orange").encoded_as(EncodedValue::Int(10))),
//! );
//!
//! let unit = vec![(fruit, DerivationDirective::converter().with_accessors())];
//! let (source, errors) = derive_unit_to_source(&unit);
//! assert!(errors.is_empty());
//! assert!(source.contains("fruitToExternal"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`decl`] - Declaration model, directives, validation
//! - [`codegen`] - Encoding tables, generators, descriptors, emitters

pub mod prelude;

/// Declaration model and derivation directives.
pub mod decl {
    pub use bridgegen_decl::*;
}

/// Derivation engine and emission adapters.
pub mod codegen {
    pub use bridgegen_codegen::*;
}
