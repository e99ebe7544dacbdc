//! Error types for derivation.

use bridgegen_decl::{DeclError, EncodedValue};
use thiserror::Error;

/// Error type for generation-time failures.
///
/// Every variant except `Io` is raised while deriving, before anything
/// is emitted for the offending declaration. The runtime present/absent
/// outcome of a non-opaque enum `fromExternal` is part of the generated
/// function's contract and is not represented here.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// Malformed declaration.
    #[error("declaration error: {0}")]
    Decl(#[from] DeclError),

    /// Two constructors resolve to the same encoded value.
    #[error(
        "encoding collision in '{decl}': constructors '{first}' and '{second}' both encode to {value}"
    )]
    EncodingCollision {
        /// Declaration name.
        decl: String,
        /// Constructor that received the value first.
        first: String,
        /// Constructor that collided with it.
        second: String,
        /// The shared encoded value.
        value: EncodedValue,
    },

    /// Explicit encoding literal kind mismatches the table mode.
    #[error(
        "invalid encoding attribute on constructor '{constructor}' in '{decl}': expected {expected} literal, found {found}"
    )]
    InvalidAttribute {
        /// Declaration name.
        decl: String,
        /// Constructor carrying the attribute.
        constructor: String,
        /// Literal kind required by the table mode.
        expected: &'static str,
        /// Literal kind actually supplied.
        found: &'static str,
    },

    /// Generated identifier collides with an existing binding.
    #[error("generated identifier '{identifier}' for declaration '{decl}' is already bound")]
    NameCollision {
        /// Declaration name.
        decl: String,
        /// Colliding identifier.
        identifier: String,
    },

    /// Derivation requested on an unsupported member shape.
    #[error("unsupported shape in declaration '{decl}': {reason}")]
    UnsupportedShape {
        /// Declaration name.
        decl: String,
        /// Human-readable reason.
        reason: String,
    },

    /// IO error while writing emitted source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeriveError {
    /// Creates an encoding collision error.
    pub fn collision(
        decl: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        value: EncodedValue,
    ) -> Self {
        Self::EncodingCollision {
            decl: decl.into(),
            first: first.into(),
            second: second.into(),
            value,
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attribute(
        decl: impl Into<String>,
        constructor: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidAttribute {
            decl: decl.into(),
            constructor: constructor.into(),
            expected,
            found,
        }
    }

    /// Creates a name collision error.
    pub fn name_collision(decl: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NameCollision {
            decl: decl.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates an unsupported shape error.
    pub fn unsupported(decl: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            decl: decl.into(),
            reason: reason.into(),
        }
    }
}
