//! Error types for declaration validation.

use thiserror::Error;

/// Error type for malformed declarations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclError {
    /// Two members of the same declaration share a name.
    #[error("duplicate {kind} '{member}' in declaration '{decl}'")]
    DuplicateMember {
        /// Declaration name.
        decl: String,
        /// Member kind ("constructor" or "field").
        kind: &'static str,
        /// Duplicated member name.
        member: String,
    },

    /// Declaration has no members.
    #[error("declaration '{decl}' has no members")]
    EmptyDeclaration {
        /// Declaration name.
        decl: String,
    },
}

impl DeclError {
    /// Creates a duplicate member error.
    pub fn duplicate(
        decl: impl Into<String>,
        kind: &'static str,
        member: impl Into<String>,
    ) -> Self {
        Self::DuplicateMember {
            decl: decl.into(),
            kind,
            member: member.into(),
        }
    }

    /// Creates an empty declaration error.
    pub fn empty(decl: impl Into<String>) -> Self {
        Self::EmptyDeclaration { decl: decl.into() }
    }
}
