//! # Bridgegen Decl
//!
//! Type declaration model and derivation directives.
//!
//! This crate provides:
//! - In-memory representation of variant and record declarations
//! - Derivation directives (accessors, converter, opaque converter)
//! - Declaration validation
//!
//! Declarations are produced by an upstream parser and consumed by the
//! `bridgegen-codegen` crate; they are immutable once built.

pub mod decl;
pub mod directive;
pub mod error;
pub mod validation;

pub use decl::{
    Constructor, DeclKind, EncodedValue, Field, RecordDecl, SourceLoc, TypeDeclaration,
    VariantDecl, lower_first,
};
pub use directive::{ConverterDirective, DerivationDirective};
pub use error::DeclError;
pub use validation::validate_declaration;
