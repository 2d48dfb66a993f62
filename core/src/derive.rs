//! Shape derivation
//!
//! The four derivations over a schema description. Row, insert, and update
//! shapes are total functions of a single table; projected shapes resolve
//! relation names against the whole schema and so can fail with a
//! [`ShapeError`] when the projection references names the description
//! does not define.
//!
//! Malformed descriptions (duplicate column names, relations whose source
//! table is missing) are the introspection producer's contract violation
//! and are not detected here.

use rowshape_types::{Cardinality, Column, ColumnMode, Schema, Table};

use crate::error::{Result, ShapeError};
use crate::projection::{ColumnSelection, Projection, ProjectionEntry};
use crate::shape::{Presence, Shape, ShapeField, ShapeKind, ShapeTy};

/// Derive the type shape of a successfully read record.
///
/// Every column appears exactly once, with its nullability preserved.
#[must_use]
pub fn row_shape(table: &Table) -> Shape {
    let fields = table
        .columns
        .iter()
        .map(|column| scalar_field(column, Presence::Required))
        .collect::<Vec<_>>();

    crate::rowshape_trace_shape!(table.name(), "row", fields.len());

    Shape {
        table: table.name.clone(),
        kind: ShapeKind::Row,
        fields,
    }
}

/// Derive the payload shape accepted when creating a record.
///
/// Generated columns are forbidden; not-null columns without a default are
/// required; everything else is optional, keeping its nullability.
#[must_use]
pub fn insert_shape(table: &Table) -> Shape {
    let fields = table
        .columns
        .iter()
        .map(|column| {
            let presence = match column.mode() {
                ColumnMode::Generated => Presence::Forbidden,
                ColumnMode::Required => Presence::Required,
                ColumnMode::HasDefault | ColumnMode::Nullable => Presence::Optional,
            };
            scalar_field(column, presence)
        })
        .collect::<Vec<_>>();

    crate::rowshape_trace_shape!(table.name(), "insert", fields.len());

    Shape {
        table: table.name.clone(),
        kind: ShapeKind::Insert,
        fields,
    }
}

/// Derive the payload shape accepted when partially modifying a record.
///
/// Identical to [`insert_shape`] except that required columns become
/// optional: a partial update need not touch every column.
#[must_use]
pub fn update_shape(table: &Table) -> Shape {
    let fields = table
        .columns
        .iter()
        .map(|column| {
            let presence = match column.mode() {
                ColumnMode::Generated => Presence::Forbidden,
                ColumnMode::Required | ColumnMode::HasDefault | ColumnMode::Nullable => {
                    Presence::Optional
                }
            };
            scalar_field(column, presence)
        })
        .collect::<Vec<_>>();

    crate::rowshape_trace_shape!(table.name(), "update", fields.len());

    Shape {
        table: table.name.clone(),
        kind: ShapeKind::Update,
        fields,
    }
}

/// Derive the row shape restricted to exactly the projected columns and
/// relations, recursing into nested selections.
///
/// A `Many` relation types as a sequence of the related shape; a `One`
/// relation types as an optional singleton, absent when no matching row
/// exists. References to unknown columns, relations, or relation targets
/// surface as a [`ShapeError`].
pub fn projected_shape(schema: &Schema, table: &Table, projection: &Projection) -> Result<Shape> {
    let mut fields = Vec::with_capacity(projection.len());

    for entry in &projection.entries {
        match entry {
            ProjectionEntry::Column(name) => {
                let column =
                    table
                        .column(name.as_ref())
                        .ok_or_else(|| ShapeError::UnknownColumn {
                            table: table.name().to_string(),
                            column: name.to_string(),
                        })?;
                fields.push(scalar_field(column, Presence::Required));
            }
            ProjectionEntry::Relation { name, select } => {
                let relation = schema.relation(table.name(), name.as_ref()).ok_or_else(|| {
                    ShapeError::UnknownRelation {
                        table: table.name().to_string(),
                        relation: name.to_string(),
                    }
                })?;
                let target = schema
                    .table(relation.target.as_ref())
                    .ok_or_else(|| ShapeError::UnknownTable(relation.target.to_string()))?;

                let nested = match select {
                    ColumnSelection::All => row_shape(target),
                    ColumnSelection::Partial(nested) => projected_shape(schema, target, nested)?,
                };

                let (ty, nullable) = match relation.cardinality {
                    Cardinality::Many => (ShapeTy::Many(Box::new(nested)), false),
                    Cardinality::One => (ShapeTy::One(Box::new(nested)), true),
                };

                fields.push(ShapeField {
                    name: relation.name.clone(),
                    ty,
                    nullable,
                    presence: Presence::Required,
                });
            }
        }
    }

    crate::rowshape_trace_shape!(table.name(), "projected", fields.len());

    Ok(Shape {
        table: table.name.clone(),
        kind: ShapeKind::Projected,
        fields,
    })
}

fn scalar_field(column: &Column, presence: Presence) -> ShapeField {
    ShapeField {
        name: column.name.clone(),
        ty: ShapeTy::Scalar(column.ty),
        nullable: column.is_nullable(),
        presence,
    }
}
