//! Projection inputs
//!
//! A [`Projection`] is the structural, name-based description of the
//! columns and nested relation selections a caller wants in a result
//! shape. It is built with consuming builder methods; parsing compact
//! query strings into projections belongs to an external query-builder
//! collaborator, not here.

use std::borrow::Cow;

/// A caller-specified subset of columns and relation selections.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Projection {
    /// Selected entries in declaration order
    pub entries: Vec<ProjectionEntry>,
}

/// One selected column or relation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ProjectionEntry {
    /// Select a column by name
    Column(Cow<'static, str>),
    /// Select a relation, with all or a subset of the target's columns
    Relation {
        /// Relation name on the source table
        name: Cow<'static, str>,
        /// Which target columns (and nested relations) to include
        select: ColumnSelection,
    },
}

/// All columns of a relation target, or a nested subset.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ColumnSelection {
    /// Every column of the target table
    #[default]
    All,
    /// A nested projection over the target table
    Partial(Projection),
}

impl Projection {
    /// Create an empty projection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a column
    #[must_use]
    pub fn column(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.entries.push(ProjectionEntry::Column(name.into()));
        self
    }

    /// Select several columns
    #[must_use]
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.entries
            .extend(names.into_iter().map(|n| ProjectionEntry::Column(n.into())));
        self
    }

    /// Select a relation
    #[must_use]
    pub fn relation(
        mut self,
        name: impl Into<Cow<'static, str>>,
        select: impl Into<ColumnSelection>,
    ) -> Self {
        self.entries.push(ProjectionEntry::Relation {
            name: name.into(),
            select: select.into(),
        });
        self
    }

    /// True if nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of selected entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<Projection> for ColumnSelection {
    fn from(projection: Projection) -> Self {
        Self::Partial(projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let projection = Projection::new()
            .columns(["id", "name"])
            .relation("cities", Projection::new().columns(["id", "name"]));

        assert_eq!(projection.len(), 3);
        assert_eq!(
            projection.entries[0],
            ProjectionEntry::Column("id".into())
        );
        match &projection.entries[2] {
            ProjectionEntry::Relation { name, select } => {
                assert_eq!(name, "cities");
                assert!(matches!(select, ColumnSelection::Partial(p) if p.len() == 2));
            }
            other => panic!("expected relation entry, got {other:?}"),
        }
    }

    #[test]
    fn test_relation_all_selection() {
        let projection = Projection::new().relation("cities", ColumnSelection::All);
        match &projection.entries[0] {
            ProjectionEntry::Relation { select, .. } => {
                assert_eq!(*select, ColumnSelection::All);
            }
            other => panic!("expected relation entry, got {other:?}"),
        }
    }
}
