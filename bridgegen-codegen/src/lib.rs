//! # Bridgegen Codegen
//!
//! Derivation of accessors and converters from type declarations.
//!
//! This crate provides:
//! - Encoding table construction for enum converters
//! - Accessor generation for records and variants
//! - Converter synthesis across the typed/untyped boundary
//! - Generated-function descriptors and a default text emitter
//!
//! Generation is single-threaded, synchronous and deterministic: the
//! same unit always produces byte-identical output. The only mutable
//! state is the [`SymbolTable`] threaded explicitly through each call.

pub mod accessors;
pub mod convert;
pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod render;
pub mod symbols;

pub use accessors::AccessorGenerator;
pub use convert::ConverterSynthesizer;
pub use descriptor::{BodyShape, Derived, GeneratedFn};
pub use encoding::{EncodingMode, EncodingTable};
pub use error::DeriveError;
pub use render::{Emitter, TextEmitter};
pub use symbols::SymbolTable;

use bridgegen_decl::{DerivationDirective, TypeDeclaration, validate_declaration};

/// Derives everything a directive selects for one declaration.
///
/// The symbol table is updated only on success; a failed declaration
/// leaves it exactly as it was, so later declarations in the unit are
/// unaffected.
///
/// # Errors
/// Returns `DeriveError` if validation or any generator fails.
pub fn derive_declaration(
    decl: &TypeDeclaration,
    directive: &DerivationDirective,
    symbols: &mut SymbolTable,
) -> Result<Derived, DeriveError> {
    validate_declaration(decl)?;

    let mut scratch = symbols.clone();
    let mut fns = Vec::new();
    let mut opaque_alias = None;

    if directive.accessors {
        fns.extend(AccessorGenerator::new(decl).generate(&mut scratch)?);
    }
    if let Some(converter) = &directive.converter {
        let (pair, alias) = ConverterSynthesizer::new(decl, converter).generate(&mut scratch)?;
        fns.extend(pair);
        opaque_alias = alias;
    }

    *symbols = scratch;
    tracing::debug!(
        "derived {} binding(s) for declaration '{}'",
        fns.len(),
        decl.name
    );

    Ok(Derived {
        decl: decl.name.clone(),
        fns,
        opaque_alias,
    })
}

/// Derives a whole compilation unit, one result per declaration.
///
/// An error aborts generation for the offending declaration only;
/// the rest of the unit is processed normally.
pub fn derive_unit(
    unit: &[(TypeDeclaration, DerivationDirective)],
) -> Vec<Result<Derived, DeriveError>> {
    let mut symbols = SymbolTable::new();
    unit.iter()
        .map(|(decl, directive)| {
            let result = derive_declaration(decl, directive, &mut symbols);
            if let Err(e) = &result {
                tracing::warn!("skipping declaration '{}': {}", decl.name, e);
            }
            result
        })
        .collect()
}

/// Derives a unit and renders the successful declarations with the
/// default text emitter. Returns the source alongside the errors of any
/// skipped declarations.
#[must_use]
pub fn derive_unit_to_source(
    unit: &[(TypeDeclaration, DerivationDirective)],
) -> (String, Vec<DeriveError>) {
    let mut derived = Vec::new();
    let mut errors = Vec::new();
    for result in derive_unit(unit) {
        match result {
            Ok(d) => derived.push(d),
            Err(e) => errors.push(e),
        }
    }
    (TextEmitter::new().emit(&derived), errors)
}

/// Derives a unit and writes the rendered source to a file.
///
/// Per-declaration errors are returned for reporting; only an IO
/// failure aborts the write itself.
///
/// # Errors
/// Returns `DeriveError::Io` if the file cannot be written.
pub fn derive_unit_to_file(
    unit: &[(TypeDeclaration, DerivationDirective)],
    path: &std::path::Path,
) -> Result<Vec<DeriveError>, DeriveError> {
    let (source, errors) = derive_unit_to_source(unit);
    std::fs::write(path, source)?;
    Ok(errors)
}
