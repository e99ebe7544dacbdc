//! Generated-function descriptors.
//!
//! Descriptors are the output surface of the derivation engine: an
//! ordered list of named functions with a body shape, handed to an
//! emission adapter for rendering into final source text.

use crate::encoding::EncodingTable;

/// One generated function (or plain value, when `arity` is zero).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFn {
    /// Generated identifier.
    pub name: String,
    /// Number of parameters.
    pub arity: usize,
    /// Body shape consumed by the emitter.
    pub body: BodyShape,
    /// Whether the binding appears in the export table.
    pub exported: bool,
}

impl GeneratedFn {
    /// Creates an exported descriptor. All derived identifiers are
    /// exported.
    #[must_use]
    pub fn exported(name: impl Into<String>, arity: usize, body: BodyShape) -> Self {
        Self {
            name: name.into(),
            arity,
            body,
            exported: true,
        }
    }
}

/// Body shape of a generated function.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// Plain value: the structural tag of a payload-free constructor.
    /// The tag is the declaration-order index, independent of any
    /// encoding table value.
    ConstructorTag {
        /// Declaration-order index.
        index: usize,
    },
    /// N-ary constructor function producing a value tagged with the
    /// declaration-order index and carrying the arguments in order.
    ConstructorApply {
        /// Declaration-order index.
        index: usize,
        /// Payload arity.
        arity: usize,
    },
    /// Unary projection returning one record field.
    FieldProjection {
        /// Field name.
        field: String,
    },
    /// Total shallow copy of a record into an open external object.
    RecordToObject {
        /// Field names in declaration order.
        fields: Vec<String>,
        /// Result is a nominal opaque alias.
        opaque: bool,
    },
    /// Total shallow copy back from an external object; extra fields
    /// are ignored.
    RecordFromObject {
        /// Field names in declaration order.
        fields: Vec<String>,
        /// Input is the opaque alias (no validation either way; the
        /// copies are total regardless).
        opaque: bool,
    },
    /// Total constructor-to-encoded-value conversion.
    EnumToValue {
        /// Encoding table for the declaration.
        table: EncodingTable,
        /// Result is a nominal opaque alias.
        opaque: bool,
    },
    /// Encoded-value-to-constructor conversion. Partial (present/absent)
    /// unless `total`, which opaque provenance makes safe.
    EnumFromValue {
        /// Encoding table for the declaration.
        table: EncodingTable,
        /// True in opaque mode: no absent case is generated.
        total: bool,
    },
}

/// Everything derived for one declaration, in deterministic order:
/// accessors in declaration order, then `toExternal`, then
/// `fromExternal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    /// Declaration name.
    pub decl: String,
    /// Generated function descriptors.
    pub fns: Vec<GeneratedFn>,
    /// Opaque alias type name, when converting in opaque mode.
    pub opaque_alias: Option<String>,
}
