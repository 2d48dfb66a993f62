//! Table description types
//!
//! This module provides two complementary types:
//! - [`TableDef`] - A const-friendly definition type for compile-time schema descriptions
//! - [`Table`] - A runtime type for serde serialization/deserialization
//!
//! Column names are unique within a table by the introspection producer's
//! contract; lookups here return the first match.

use std::borrow::Cow;

use crate::column::{Column, ColumnDef};

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly table definition for compile-time schema descriptions.
///
/// # Examples
///
/// ```
/// use rowshape_types::{ColumnDef, ScalarType, TableDef};
///
/// const MOVIES: TableDef = TableDef::new(
///     "movies",
///     &[
///         ColumnDef::new("id", ScalarType::BigInt).not_null().generated(),
///         ColumnDef::new("name", ScalarType::Text).not_null(),
///         ColumnDef::new("data", ScalarType::Json),
///     ],
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableDef {
    /// Table name
    pub name: &'static str,
    /// Ordered column definitions
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    /// Create a new table definition
    #[must_use]
    pub const fn new(name: &'static str, columns: &'static [ColumnDef]) -> Self {
        Self { name, columns }
    }

    /// Convert to runtime [`Table`] type
    #[must_use]
    pub fn into_table(self) -> Table {
        Table {
            name: Cow::Borrowed(self.name),
            columns: self.columns.iter().map(|c| c.into_column()).collect(),
        }
    }
}

impl Default for TableDef {
    fn default() -> Self {
        Self::new("", &[])
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime table entity for serde serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Table {
    /// Table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Ordered columns
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a new table (runtime)
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Get the table name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate the column names in declaration order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<TableDef> for Table {
    fn from(def: TableDef) -> Self {
        def.into_table()
    }
}
