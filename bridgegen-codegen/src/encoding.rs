//! Encoding table construction.
//!
//! Assigns each variant constructor its external encoded value: integers
//! for ordinary variants, strings for polymorphic variants. Authors may
//! override individual values; defaulting rules fill in the rest.

use std::collections::HashMap;

use bridgegen_decl::{EncodedValue, VariantDecl};

use crate::error::DeriveError;

/// Encoding mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Integer encodings (ordinary variants).
    Int,
    /// String encodings (polymorphic variants).
    Str,
}

impl EncodingMode {
    /// Literal kind accepted by this mode, for diagnostics.
    #[must_use]
    pub const fn literal_kind(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Str => "string",
        }
    }
}

/// Ordered constructor-to-value mapping with its injective inverse.
///
/// Built once per declaration, immutable afterwards. The inverse map is
/// used for lookup only and is never iterated during emission, so output
/// stays byte-identical across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingTable {
    mode: EncodingMode,
    entries: Vec<(String, EncodedValue)>,
    inverse: HashMap<EncodedValue, usize>,
}

impl EncodingTable {
    /// Builds the table for a variant's constructors, in declaration
    /// order.
    ///
    /// Integer mode: a defaulted constructor receives the previously
    /// assigned value plus one, explicit overrides included, starting
    /// from zero. String mode: a defaulted constructor receives its own
    /// name; overrides replace the string outright without affecting
    /// siblings.
    ///
    /// # Errors
    /// `EncodingCollision` when two constructors resolve to the same
    /// value; `InvalidAttribute` when an override literal kind
    /// mismatches the mode; `UnsupportedShape` when a defaulted
    /// integer would overflow the representable range.
    pub fn build(decl_name: &str, variant: &VariantDecl) -> Result<Self, DeriveError> {
        let mode = if variant.poly {
            EncodingMode::Str
        } else {
            EncodingMode::Int
        };

        let mut entries: Vec<(String, EncodedValue)> =
            Vec::with_capacity(variant.constructors.len());
        let mut inverse: HashMap<EncodedValue, usize> =
            HashMap::with_capacity(variant.constructors.len());
        // Next defaulted integer is previous + 1; first default is 0.
        let mut previous = -1i64;

        for ctor in &variant.constructors {
            let value = match (&ctor.explicit_encoding, mode) {
                (Some(EncodedValue::Int(v)), EncodingMode::Int) => EncodedValue::Int(*v),
                (Some(EncodedValue::Str(s)), EncodingMode::Str) => EncodedValue::Str(s.clone()),
                (Some(other), _) => {
                    return Err(DeriveError::invalid_attribute(
                        decl_name,
                        &ctor.name,
                        mode.literal_kind(),
                        other.kind(),
                    ));
                }
                (None, EncodingMode::Int) => {
                    let next = previous.checked_add(1).ok_or_else(|| {
                        DeriveError::unsupported(
                            decl_name,
                            format!(
                                "defaulted encoding for constructor '{}' overflows the integer range",
                                ctor.name
                            ),
                        )
                    })?;
                    EncodedValue::Int(next)
                }
                (None, EncodingMode::Str) => EncodedValue::Str(ctor.name.clone()),
            };

            if let EncodedValue::Int(v) = &value {
                previous = *v;
            }

            if let Some(&earlier) = inverse.get(&value) {
                let (first, _) = &entries[earlier];
                return Err(DeriveError::collision(
                    decl_name,
                    first.clone(),
                    &ctor.name,
                    value,
                ));
            }

            // Table position, not ctor.index: the fields are public,
            // so a hand-built variant may carry stale indices.
            inverse.insert(value.clone(), entries.len());
            entries.push((ctor.name.clone(), value));
        }

        Ok(Self {
            mode,
            entries,
            inverse,
        })
    }

    /// Table mode.
    #[must_use]
    pub const fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Number of constructors in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encoded value of the constructor at `index`.
    #[must_use]
    pub fn value_of(&self, index: usize) -> &EncodedValue {
        &self.entries[index].1
    }

    /// Name of the constructor at `index`.
    #[must_use]
    pub fn name_of(&self, index: usize) -> &str {
        &self.entries[index].0
    }

    /// Constructor index for an externally supplied value, if any.
    #[must_use]
    pub fn constructor_for(&self, value: &EncodedValue) -> Option<usize> {
        self.inverse.get(value).copied()
    }

    /// Iterates `(constructor name, encoded value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EncodedValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgegen_decl::Constructor;

    #[test]
    fn test_int_defaults_continue_after_override() {
        let variant = VariantDecl::new()
            .with(Constructor::new("A"))
            .with(Constructor::new("B").encoded_as(EncodedValue::Int(10)))
            .with(Constructor::new("C"))
            .with(Constructor::new("D"));

        let table = EncodingTable::build("letters", &variant).expect("table");
        assert_eq!(table.mode(), EncodingMode::Int);
        assert_eq!(table.value_of(0), &EncodedValue::Int(0));
        assert_eq!(table.value_of(1), &EncodedValue::Int(10));
        assert_eq!(table.value_of(2), &EncodedValue::Int(11));
        assert_eq!(table.value_of(3), &EncodedValue::Int(12));
    }

    #[test]
    fn test_override_never_shifts_preceding_defaults() {
        let variant = VariantDecl::new()
            .with(Constructor::new("A"))
            .with(Constructor::new("B"))
            .with(Constructor::new("C").encoded_as(EncodedValue::Int(100)));

        let table = EncodingTable::build("letters", &variant).expect("table");
        assert_eq!(table.value_of(0), &EncodedValue::Int(0));
        assert_eq!(table.value_of(1), &EncodedValue::Int(1));
        assert_eq!(table.value_of(2), &EncodedValue::Int(100));
    }

    #[test]
    fn test_collision_with_defaulted_value() {
        let variant = VariantDecl::new()
            .with(Constructor::new("A"))
            .with(Constructor::new("B").encoded_as(EncodedValue::Int(0)));

        let err = EncodingTable::build("letters", &variant).expect_err("collision");
        match err {
            DeriveError::EncodingCollision {
                first,
                second,
                value,
                ..
            } => {
                assert_eq!(first, "A");
                assert_eq!(second, "B");
                assert_eq!(value, EncodedValue::Int(0));
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_string_defaults_are_constructor_names() {
        let variant = VariantDecl::poly()
            .with(Constructor::new("Apple"))
            .with(Constructor::new("Kiwi").encoded_as(EncodedValue::Str("miniCoconut".into())))
            .with(Constructor::new("Orange"));

        let table = EncodingTable::build("fruit", &variant).expect("table");
        assert_eq!(table.mode(), EncodingMode::Str);
        assert_eq!(table.value_of(0), &EncodedValue::Str("Apple".into()));
        assert_eq!(table.value_of(1), &EncodedValue::Str("miniCoconut".into()));
        // No chaining in string mode: siblings keep their own names.
        assert_eq!(table.value_of(2), &EncodedValue::Str("Orange".into()));
    }

    #[test]
    fn test_string_collision() {
        let variant = VariantDecl::poly()
            .with(Constructor::new("Apple"))
            .with(Constructor::new("Kiwi").encoded_as(EncodedValue::Str("Apple".into())));

        assert!(matches!(
            EncodingTable::build("fruit", &variant),
            Err(DeriveError::EncodingCollision { .. })
        ));
    }

    #[test]
    fn test_attribute_kind_mismatch() {
        let variant = VariantDecl::new()
            .with(Constructor::new("Apple").encoded_as(EncodedValue::Str("apple".into())));

        let err = EncodingTable::build("fruit", &variant).expect_err("mismatch");
        match err {
            DeriveError::InvalidAttribute {
                expected, found, ..
            } => {
                assert_eq!(expected, "int");
                assert_eq!(found, "string");
            }
            other => panic!("expected invalid attribute, got {other:?}"),
        }

        let variant =
            VariantDecl::poly().with(Constructor::new("Apple").encoded_as(EncodedValue::Int(1)));
        assert!(matches!(
            EncodingTable::build("fruit", &variant),
            Err(DeriveError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_inverse_lookup() {
        let variant = VariantDecl::new()
            .with(Constructor::new("Apple"))
            .with(Constructor::new("Orange").encoded_as(EncodedValue::Int(10)))
            .with(Constructor::new("Kiwi").encoded_as(EncodedValue::Int(100)))
            .with(Constructor::new("Watermelon"));

        let table = EncodingTable::build("fruit", &variant).expect("table");
        assert_eq!(table.value_of(3), &EncodedValue::Int(101));
        assert_eq!(table.constructor_for(&EncodedValue::Int(100)), Some(2));
        assert_eq!(table.constructor_for(&EncodedValue::Int(7)), None);
        assert_eq!(table.name_of(2), "Kiwi");
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_default_after_max_override_is_an_error() {
        let variant = VariantDecl::new()
            .with(Constructor::new("A").encoded_as(EncodedValue::Int(i64::MAX)))
            .with(Constructor::new("B"));

        let err = EncodingTable::build("letters", &variant).expect_err("overflow");
        match err {
            DeriveError::UnsupportedShape { reason, .. } => {
                assert!(reason.contains("'B'"));
            }
            other => panic!("expected unsupported shape, got {other:?}"),
        }
    }

    #[test]
    fn test_collision_reporting_ignores_stale_indices() {
        // Constructors built by hand, bypassing add_constructor, so the
        // declared indices do not match their positions.
        let mut a = Constructor::new("A");
        a.index = 7;
        let mut b = Constructor::new("B").encoded_as(EncodedValue::Int(0));
        b.index = 3;
        let variant = VariantDecl {
            constructors: vec![a, b],
            poly: false,
        };

        let err = EncodingTable::build("letters", &variant).expect_err("collision");
        match err {
            DeriveError::EncodingCollision { first, second, .. } => {
                assert_eq!(first, "A");
                assert_eq!(second, "B");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_for_every_constructor() {
        let variant = VariantDecl::new()
            .with(Constructor::new("Apple"))
            .with(Constructor::new("Orange").encoded_as(EncodedValue::Int(10)))
            .with(Constructor::new("Kiwi").encoded_as(EncodedValue::Int(100)))
            .with(Constructor::new("Watermelon"));

        let table = EncodingTable::build("fruit", &variant).expect("table");
        for index in 0..table.len() {
            assert_eq!(table.constructor_for(table.value_of(index)), Some(index));
        }
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let variant = VariantDecl::new()
            .with(Constructor::new("B").encoded_as(EncodedValue::Int(5)))
            .with(Constructor::new("A"));

        let table = EncodingTable::build("letters", &variant).expect("table");
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(table.value_of(1), &EncodedValue::Int(6));
    }
}
