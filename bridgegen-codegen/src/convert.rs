//! Converter synthesis.
//!
//! Produces the `toExternal` / `fromExternal` pair for a declaration.
//! Records convert to open external objects; enum-like variants convert
//! to integers, polymorphic variants to strings. Opaque mode types the
//! external value as a nominal alias whose only producer is `toExternal`,
//! which makes the reverse conversion total.

use bridgegen_decl::{ConverterDirective, DeclKind, TypeDeclaration, VariantDecl};

use crate::descriptor::{BodyShape, GeneratedFn};
use crate::encoding::EncodingTable;
use crate::error::DeriveError;
use crate::symbols::SymbolTable;

/// Generator for converter pairs.
pub struct ConverterSynthesizer<'a> {
    decl: &'a TypeDeclaration,
    directive: &'a ConverterDirective,
}

impl<'a> ConverterSynthesizer<'a> {
    /// Creates a new converter synthesizer.
    #[must_use]
    pub fn new(decl: &'a TypeDeclaration, directive: &'a ConverterDirective) -> Self {
        Self { decl, directive }
    }

    /// Name of the generated forward converter.
    #[must_use]
    pub fn to_external_name(&self) -> String {
        format!("{}ToExternal", self.decl.name)
    }

    /// Name of the generated reverse converter.
    #[must_use]
    pub fn from_external_name(&self) -> String {
        format!("{}FromExternal", self.decl.name)
    }

    /// Generates the converter pair, binding both identifiers. Returns
    /// the descriptors plus the opaque alias name, when opaque mode is
    /// selected.
    ///
    /// # Errors
    /// Any encoding table error; `NameCollision` on identifier reuse;
    /// `UnsupportedShape` for payload-bearing constructors in enum
    /// modes.
    pub fn generate(
        &self,
        symbols: &mut SymbolTable,
    ) -> Result<(Vec<GeneratedFn>, Option<String>), DeriveError> {
        let to_name = self.to_external_name();
        let from_name = self.from_external_name();
        symbols.bind(&self.decl.name, &to_name)?;
        symbols.bind(&self.decl.name, &from_name)?;

        let opaque = self.directive.opaque;
        let (to_body, from_body) = match &self.decl.kind {
            DeclKind::Record(record) => {
                let fields: Vec<String> = record.fields.iter().map(|f| f.name.clone()).collect();
                (
                    BodyShape::RecordToObject {
                        fields: fields.clone(),
                        opaque,
                    },
                    BodyShape::RecordFromObject { fields, opaque },
                )
            }
            DeclKind::Variant(variant) => {
                self.reject_payload_constructors(variant)?;
                let table = EncodingTable::build(&self.decl.name, variant)?;
                (
                    BodyShape::EnumToValue {
                        table: table.clone(),
                        opaque,
                    },
                    // Opaque provenance removes the absent case: the
                    // alias has no producer other than `toExternal`.
                    BodyShape::EnumFromValue {
                        table,
                        total: opaque,
                    },
                )
            }
        };

        let fns = vec![
            GeneratedFn::exported(to_name, 1, to_body),
            GeneratedFn::exported(from_name, 1, from_body),
        ];
        let alias = opaque.then(|| opaque_alias_name(&self.decl.name));
        Ok((fns, alias))
    }

    fn reject_payload_constructors(&self, variant: &VariantDecl) -> Result<(), DeriveError> {
        if let Some(ctor) = variant.constructors.iter().find(|c| c.payload_arity > 0) {
            return Err(DeriveError::unsupported(
                &self.decl.name,
                format!(
                    "constructor '{}' carries a payload; enum converters require payload-free constructors",
                    ctor.name
                ),
            ));
        }
        Ok(())
    }
}

/// Opaque alias type name for a declaration.
#[must_use]
pub fn opaque_alias_name(decl_name: &str) -> String {
    let mut chars = decl_name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("Opaque{capitalized}")
}
