//! Relationship description types
//!
//! A [`Relation`] ties a source table to a target table through a
//! foreign-key pairing, with an explicit [`Cardinality`]. Cardinality is
//! part of the description - it is never inferred from naming conventions -
//! and decides whether a projected relation types as a sequence or as an
//! optional singleton.
//!
//! The join pairing reads `source.columns[i] = target.references[i]`. For a
//! one-to-many relation the source columns are the key columns and the
//! referenced columns live on the many side; for a many-to-one relation the
//! source carries the foreign key.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

/// Whether a relation yields many related rows or at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cardinality {
    /// One-to-many: a projected selection types as a sequence of related rows
    Many,
    /// Many-to-one: at most one related row, absent under outer-join semantics
    One,
}

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly relation definition
///
/// # Examples
///
/// ```
/// use rowshape_types::{Cardinality, RelationDef};
///
/// const CITIES: RelationDef =
///     RelationDef::new("cities", "countries", "cities", Cardinality::Many)
///         .columns(&["id"])
///         .references(&["country_id"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelationDef {
    /// Relation name, the key used in projections
    pub name: &'static str,
    /// Source table name
    pub table: &'static str,
    /// Target table name
    pub target: &'static str,
    /// Relation cardinality
    pub cardinality: Cardinality,
    /// Join columns on the source table
    pub columns: &'static [&'static str],
    /// Join columns on the target table
    pub references: &'static [&'static str],
}

impl RelationDef {
    /// Create a new relation definition
    #[must_use]
    pub const fn new(
        name: &'static str,
        table: &'static str,
        target: &'static str,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name,
            table,
            target,
            cardinality,
            columns: &[],
            references: &[],
        }
    }

    /// Set the join columns on the source table
    #[must_use]
    pub const fn columns(self, columns: &'static [&'static str]) -> Self {
        Self { columns, ..self }
    }

    /// Set the join columns on the target table
    #[must_use]
    pub const fn references(self, references: &'static [&'static str]) -> Self {
        Self { references, ..self }
    }

    /// Convert to runtime [`Relation`] type
    #[must_use]
    pub fn into_relation(self) -> Relation {
        Relation {
            name: Cow::Borrowed(self.name),
            table: Cow::Borrowed(self.table),
            target: Cow::Borrowed(self.target),
            cardinality: self.cardinality,
            columns: self.columns.iter().map(|c| Cow::Borrowed(*c)).collect(),
            references: self.references.iter().map(|c| Cow::Borrowed(*c)).collect(),
        }
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime relation entity for serde serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Relation {
    /// Relation name, the key used in projections
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Source table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub table: Cow<'static, str>,

    /// Target table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub target: Cow<'static, str>,

    /// Relation cardinality
    pub cardinality: Cardinality,

    /// Join columns on the source table
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub columns: Vec<Cow<'static, str>>,

    /// Join columns on the target table
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub references: Vec<Cow<'static, str>>,
}

impl Relation {
    /// Create a new relation (runtime)
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        table: impl Into<Cow<'static, str>>,
        target: impl Into<Cow<'static, str>>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            target: target.into(),
            cardinality,
            columns: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Set the join columns on the source table
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the join columns on the target table
    #[must_use]
    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    /// Get the relation name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<RelationDef> for Relation {
    fn from(def: RelationDef) -> Self {
        def.into_relation()
    }
}
