//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use bridgegen::prelude::*;
//! ```

// Declaration model
pub use bridgegen_decl::{
    Constructor, ConverterDirective, DeclError, DeclKind, DerivationDirective, EncodedValue,
    Field, RecordDecl, SourceLoc, TypeDeclaration, VariantDecl, validate_declaration,
};

// Derivation engine
pub use bridgegen_codegen::{
    AccessorGenerator, BodyShape, ConverterSynthesizer, Derived, DeriveError, Emitter,
    EncodingMode, EncodingTable, GeneratedFn, SymbolTable, TextEmitter, derive_declaration,
    derive_unit, derive_unit_to_file, derive_unit_to_source,
};
