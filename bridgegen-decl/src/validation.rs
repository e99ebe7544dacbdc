//! Declaration validation.
//!
//! Checks declarations for structural correctness before generation.
//! Encoding and identifier rules are checked later, in the codegen crate,
//! because they depend on the derivation mode.

use std::collections::HashSet;

use crate::decl::{DeclKind, TypeDeclaration};
use crate::error::DeclError;

/// Validates a declaration for correctness.
///
/// # Errors
/// Returns `DeclError` if the declaration has no members or contains
/// duplicate member names.
pub fn validate_declaration(decl: &TypeDeclaration) -> Result<(), DeclError> {
    if decl.member_count() == 0 {
        return Err(DeclError::empty(&decl.name));
    }

    let mut seen = HashSet::new();
    match &decl.kind {
        DeclKind::Variant(variant) => {
            for ctor in &variant.constructors {
                if !seen.insert(ctor.name.as_str()) {
                    return Err(DeclError::duplicate(&decl.name, "constructor", &ctor.name));
                }
            }
        }
        DeclKind::Record(record) => {
            for field in &record.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(DeclError::duplicate(&decl.name, "field", &field.name));
                }
            }
        }
    }

    Ok(())
}
