//! Declaration model definitions.
//!
//! This module contains the data structures representing a source-level
//! algebraic type declaration: variants (closed tagged unions) with their
//! constructors, and records with their fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single type declaration annotated for derivation.
///
/// Produced by the upstream parser; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Declared type name.
    pub name: String,
    /// Declaration kind (variant or record).
    pub kind: DeclKind,
    /// Source location of the declaration.
    pub loc: SourceLoc,
}

impl TypeDeclaration {
    /// Creates a variant declaration.
    #[must_use]
    pub fn variant(name: impl Into<String>, variant: VariantDecl) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Variant(variant),
            loc: SourceLoc::default(),
        }
    }

    /// Creates a record declaration.
    #[must_use]
    pub fn record(name: impl Into<String>, record: RecordDecl) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Record(record),
            loc: SourceLoc::default(),
        }
    }

    /// Attaches a source location.
    #[must_use]
    pub fn at(mut self, loc: SourceLoc) -> Self {
        self.loc = loc;
        self
    }

    /// Returns the variant body, if this is a variant declaration.
    #[must_use]
    pub fn as_variant(&self) -> Option<&VariantDecl> {
        match &self.kind {
            DeclKind::Variant(v) => Some(v),
            DeclKind::Record(_) => None,
        }
    }

    /// Returns the record body, if this is a record declaration.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordDecl> {
        match &self.kind {
            DeclKind::Record(r) => Some(r),
            DeclKind::Variant(_) => None,
        }
    }

    /// Number of members (constructors or fields).
    #[must_use]
    pub fn member_count(&self) -> usize {
        match &self.kind {
            DeclKind::Variant(v) => v.constructors.len(),
            DeclKind::Record(r) => r.fields.len(),
        }
    }
}

/// Declaration kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeclKind {
    /// Closed tagged union of named constructors.
    Variant(VariantDecl),
    /// Fixed, closed set of named fields.
    Record(RecordDecl),
}

/// Variant declaration body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariantDecl {
    /// Constructors in declaration order.
    pub constructors: Vec<Constructor>,
    /// True for polymorphic (string-encoded) variants. The union is
    /// closed either way.
    pub poly: bool,
}

impl VariantDecl {
    /// Creates an empty ordinary variant body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty polymorphic variant body.
    #[must_use]
    pub fn poly() -> Self {
        Self {
            constructors: Vec::new(),
            poly: true,
        }
    }

    /// Adds a constructor, assigning its declaration-order index.
    pub fn add_constructor(&mut self, ctor: Constructor) {
        let index = self.constructors.len();
        self.constructors.push(Constructor { index, ..ctor });
    }

    /// Adds a constructor, builder style.
    #[must_use]
    pub fn with(mut self, ctor: Constructor) -> Self {
        self.add_constructor(ctor);
        self
    }

    /// Looks up a constructor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Constructor> {
        self.constructors.iter().find(|c| c.name == name)
    }

    /// True when every constructor carries no payload.
    #[must_use]
    pub fn is_enum_like(&self) -> bool {
        self.constructors.iter().all(|c| c.payload_arity == 0)
    }
}

/// Variant constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    /// Constructor name.
    pub name: String,
    /// Number of carried payload values.
    pub payload_arity: usize,
    /// Author-supplied encoded value, if any.
    pub explicit_encoding: Option<EncodedValue>,
    /// Zero-based declaration-order index.
    pub index: usize,
}

impl Constructor {
    /// Creates a payload-free constructor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload_arity: 0,
            explicit_encoding: None,
            index: 0,
        }
    }

    /// Creates a constructor carrying `arity` payload values.
    #[must_use]
    pub fn with_arity(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            payload_arity: arity,
            explicit_encoding: None,
            index: 0,
        }
    }

    /// Attaches an explicit encoded value.
    #[must_use]
    pub fn encoded_as(mut self, value: EncodedValue) -> Self {
        self.explicit_encoding = Some(value);
        self
    }
}

/// Record declaration body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordDecl {
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl RecordDecl {
    /// Creates an empty record body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Record field. Declaration order matters only for accessor
/// generation order; names are never transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared element type name.
    pub type_name: String,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Encoded value attached to a constructor, either by default
/// assignment or by an explicit author override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodedValue {
    /// Integer encoding.
    Int(i64),
    /// String encoding.
    Str(String),
}

impl EncodedValue {
    /// Literal kind name, used in attribute mismatch diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Source location of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLoc {
    /// 1-based line number (0 when unknown).
    pub line: u32,
    /// 1-based column number (0 when unknown).
    pub column: u32,
}

impl SourceLoc {
    /// Creates a new source location.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Maps the first character of an identifier to lower case, leaving
/// the remainder unchanged.
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Apple"), "apple");
        assert_eq!(lower_first("miniCoconut"), "miniCoconut");
        assert_eq!(lower_first("X"), "x");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_add_constructor_assigns_indices() {
        let variant = VariantDecl::new()
            .with(Constructor::new("Apple"))
            .with(Constructor::with_arity("Pair", 2));

        assert_eq!(variant.constructors[0].index, 0);
        assert_eq!(variant.constructors[1].index, 1);
        assert_eq!(variant.constructors[1].payload_arity, 2);
        assert!(!variant.is_enum_like());
    }

    #[test]
    fn test_variant_lookup() {
        let variant = VariantDecl::new()
            .with(Constructor::new("Buy"))
            .with(Constructor::new("Sell").encoded_as(EncodedValue::Int(10)));

        let sell = variant.get("Sell").expect("constructor");
        assert_eq!(sell.explicit_encoding, Some(EncodedValue::Int(10)));
        assert!(variant.get("Hold").is_none());
        assert!(variant.is_enum_like());
    }

    #[test]
    fn test_record_lookup() {
        let record = RecordDecl::new()
            .with(Field::new("name", "string"))
            .with(Field::new("age", "int"));

        assert_eq!(record.get("age").expect("field").type_name, "int");
        assert!(record.get("email").is_none());
    }

    #[test]
    fn test_encoded_value_display() {
        assert_eq!(EncodedValue::Int(42).to_string(), "42");
        assert_eq!(EncodedValue::Str("Kiwi".into()).to_string(), "\"Kiwi\"");
        assert_eq!(EncodedValue::Int(0).kind(), "int");
        assert_eq!(EncodedValue::Str(String::new()).kind(), "string");
    }

    #[test]
    fn test_declaration_accessors() {
        let decl = TypeDeclaration::variant("side", VariantDecl::new().with(Constructor::new("Buy")))
            .at(SourceLoc::new(3, 1));

        assert!(decl.as_variant().is_some());
        assert!(decl.as_record().is_none());
        assert_eq!(decl.member_count(), 1);
        assert_eq!(decl.loc, SourceLoc::new(3, 1));
    }

    #[test]
    fn test_declaration_serde_round_trip() {
        let decl = TypeDeclaration::record(
            "person",
            RecordDecl::new()
                .with(Field::new("name", "string"))
                .with(Field::new("age", "int")),
        );

        let json = serde_json::to_string(&decl).expect("serialize");
        let back: TypeDeclaration = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decl, back);
    }
}
