//! Per-compilation-unit symbol table.
//!
//! Tracks bound identifiers in the exported surface so generated names
//! never collide. Threaded explicitly through each generation call;
//! never ambient.

use std::collections::HashSet;

use crate::error::DeriveError;

/// Symbol table for one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bound: HashSet<String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `identifier` is already bound.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.bound.contains(identifier)
    }

    /// Binds an identifier for the given declaration.
    ///
    /// # Errors
    /// `NameCollision` when the identifier is already bound.
    pub fn bind(&mut self, decl: &str, identifier: &str) -> Result<(), DeriveError> {
        if !self.bound.insert(identifier.to_string()) {
            return Err(DeriveError::name_collision(decl, identifier));
        }
        Ok(())
    }

    /// Number of bound identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// True when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
