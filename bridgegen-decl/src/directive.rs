//! Derivation directives.
//!
//! A directive selects which auxiliary functions the codegen crate
//! synthesizes for a declaration: accessors, a converter pair, or both.

use serde::{Deserialize, Serialize};

/// Derivation directive attached to a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivationDirective {
    /// Generate projection/construction accessors.
    pub accessors: bool,
    /// Generate a `toExternal` / `fromExternal` converter pair.
    pub converter: Option<ConverterDirective>,
}

impl DerivationDirective {
    /// Directive selecting accessors only.
    #[must_use]
    pub const fn accessors() -> Self {
        Self {
            accessors: true,
            converter: None,
        }
    }

    /// Directive selecting a non-opaque converter only.
    #[must_use]
    pub const fn converter() -> Self {
        Self {
            accessors: false,
            converter: Some(ConverterDirective { opaque: false }),
        }
    }

    /// Directive selecting an opaque ("newType") converter only.
    #[must_use]
    pub const fn converter_opaque() -> Self {
        Self {
            accessors: false,
            converter: Some(ConverterDirective { opaque: true }),
        }
    }

    /// Adds accessors to this directive.
    #[must_use]
    pub const fn with_accessors(mut self) -> Self {
        self.accessors = true;
        self
    }

    /// True when the directive selects nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.accessors && self.converter.is_none()
    }
}

/// Converter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConverterDirective {
    /// Result of `toExternal` is a nominal opaque alias, making the
    /// reverse conversion total.
    pub opaque: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_builders() {
        let d = DerivationDirective::accessors();
        assert!(d.accessors);
        assert!(d.converter.is_none());

        let d = DerivationDirective::converter_opaque().with_accessors();
        assert!(d.accessors);
        assert_eq!(d.converter, Some(ConverterDirective { opaque: true }));
    }

    #[test]
    fn test_empty_directive() {
        assert!(DerivationDirective::default().is_empty());
        assert!(!DerivationDirective::converter().is_empty());
    }
}
