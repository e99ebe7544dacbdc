//! Accessor generation.
//!
//! Synthesizes one exported binding per member: field projections for
//! records, constructor values/functions for variants.

use bridgegen_decl::{DeclKind, TypeDeclaration, lower_first};

use crate::descriptor::{BodyShape, GeneratedFn};
use crate::error::DeriveError;
use crate::symbols::SymbolTable;

/// Generator for member accessors.
pub struct AccessorGenerator<'a> {
    decl: &'a TypeDeclaration,
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub fn new(decl: &'a TypeDeclaration) -> Self {
        Self { decl }
    }

    /// Generates one descriptor per member, binding each identifier in
    /// the symbol table.
    ///
    /// # Errors
    /// `NameCollision` when a generated identifier is already bound;
    /// `UnsupportedShape` for polymorphic variants.
    pub fn generate(&self, symbols: &mut SymbolTable) -> Result<Vec<GeneratedFn>, DeriveError> {
        match &self.decl.kind {
            DeclKind::Record(record) => {
                let mut fns = Vec::with_capacity(record.fields.len());
                for field in &record.fields {
                    // Field names pass through untransformed.
                    symbols.bind(&self.decl.name, &field.name)?;
                    fns.push(GeneratedFn::exported(
                        &field.name,
                        1,
                        BodyShape::FieldProjection {
                            field: field.name.clone(),
                        },
                    ));
                }
                Ok(fns)
            }
            DeclKind::Variant(variant) => {
                if variant.poly {
                    return Err(DeriveError::unsupported(
                        &self.decl.name,
                        "accessors cannot be derived for a polymorphic variant",
                    ));
                }

                let mut fns = Vec::with_capacity(variant.constructors.len());
                for ctor in &variant.constructors {
                    let identifier = lower_first(&ctor.name);
                    symbols.bind(&self.decl.name, &identifier)?;
                    let body = if ctor.payload_arity == 0 {
                        BodyShape::ConstructorTag { index: ctor.index }
                    } else {
                        BodyShape::ConstructorApply {
                            index: ctor.index,
                            arity: ctor.payload_arity,
                        }
                    };
                    fns.push(GeneratedFn::exported(identifier, ctor.payload_arity, body));
                }
                Ok(fns)
            }
        }
    }
}
