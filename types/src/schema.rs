//! Schema container
//!
//! A [`Schema`] is the full description handed to the shape deriver:
//! tables plus the relations between them. It is immutable once built;
//! shapes are regenerated wholesale whenever the description changes.

use crate::relation::Relation;
use crate::table::Table;

/// A complete schema description.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Schema {
    /// Tables and views
    pub tables: Vec<Table>,

    /// Foreign-key relations with explicit cardinality
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub relations: Vec<Relation>,
}

impl Schema {
    /// Create an empty schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table
    #[must_use]
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Append a relation
    #[must_use]
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Look up a table by name
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Look up a relation by source table and relation name
    #[must_use]
    pub fn relation(&self, table: &str, name: &str) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.table == table && r.name == name)
    }

    /// Iterate the relations whose source is `table`
    pub fn relations_of<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a Relation> {
        self.relations.iter().filter(move |r| r.table == table)
    }
}
