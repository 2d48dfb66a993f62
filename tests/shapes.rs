//! Shape derivation invariants
//!
//! Exercises the derivation rules over a representative schema: every
//! column surfaces exactly once with nullability preserved, generated
//! columns are never writable, and required/optional classification
//! follows nullability and default-presence.

use rowshape::prelude::*;

/// A schema with every column classification represented.
fn sample_schema() -> Schema {
    Schema::new()
        .with_table(
            Table::new("movies")
                .with_column(Column::new("id", ScalarType::BigInt).not_null().generated())
                .with_column(Column::new("name", ScalarType::Text).not_null())
                .with_column(Column::new("data", ScalarType::Json)),
        )
        .with_table(
            Table::new("users")
                .with_column(Column::new("id", ScalarType::Uuid).not_null().generated())
                .with_column(Column::new("email", ScalarType::Text).not_null())
                .with_column(
                    Column::new("is_active", ScalarType::Boolean)
                        .not_null()
                        .default_value("true"),
                )
                .with_column(Column::new("display_name", ScalarType::Text))
                .with_column(
                    Column::new("created_at", ScalarType::TimestampTz)
                        .not_null()
                        .default_value("now()"),
                ),
        )
}

#[test]
fn row_shape_lists_every_column_once() {
    for table in &sample_schema().tables {
        let shape = row_shape(table);
        let names: Vec<&str> = shape.field_names().collect();
        let declared: Vec<&str> = table.column_names().collect();
        assert_eq!(names, declared);

        for column in &table.columns {
            let field = shape.field(column.name()).unwrap();
            assert_eq!(field.nullable, column.is_nullable());
        }
    }
}

#[test]
fn generated_columns_are_never_writable() {
    for table in &sample_schema().tables {
        let insert = insert_shape(table);
        let update = update_shape(table);
        for column in table.columns.iter().filter(|c| c.generated) {
            assert!(insert.field(column.name()).unwrap().is_forbidden());
            assert!(update.field(column.name()).unwrap().is_forbidden());
        }
    }
}

#[test]
fn insert_requires_exactly_not_null_no_default() {
    let schema = sample_schema();
    let users = schema.table("users").unwrap();
    let insert = insert_shape(users);

    assert!(insert.field("email").unwrap().is_required());
    assert!(insert.field("is_active").unwrap().is_optional());
    assert!(insert.field("created_at").unwrap().is_optional());
    assert!(insert.field("display_name").unwrap().is_optional());
}

#[test]
fn every_insert_required_field_is_update_optional() {
    for table in &sample_schema().tables {
        let insert = insert_shape(table);
        let update = update_shape(table);
        for field in insert.fields.iter().filter(|f| f.is_required()) {
            assert!(update.field(field.name()).unwrap().is_optional());
        }
    }
}

#[test]
fn movies_scenario() {
    // movies(id bigint generated always as identity primary key,
    //        name text not null, data jsonb null)
    let schema = sample_schema();
    let movies = schema.table("movies").unwrap();

    let row = row_shape(movies);
    assert_eq!(row.field("id").unwrap().ty.as_scalar(), Some(ScalarType::BigInt));
    assert_eq!(ScalarType::BigInt.rust_type(), "i64");
    assert!(!row.field("id").unwrap().nullable);
    assert_eq!(row.field("name").unwrap().ty.as_scalar(), Some(ScalarType::Text));
    assert!(row.field("data").unwrap().nullable);

    let insert = insert_shape(movies);
    assert!(insert.field("id").unwrap().is_forbidden());
    assert!(insert.field("name").unwrap().is_required());
    let data = insert.field("data").unwrap();
    assert!(data.is_optional() && data.nullable);

    let update = update_shape(movies);
    assert!(update.field("id").unwrap().is_forbidden());
    assert!(update.field("name").unwrap().is_optional());
    assert!(update.field("data").unwrap().is_optional());
}

#[test]
fn derivation_is_idempotent() {
    let schema = sample_schema();
    for table in &schema.tables {
        assert_eq!(row_shape(table), row_shape(table));
        assert_eq!(insert_shape(table), insert_shape(table));
        assert_eq!(update_shape(table), update_shape(table));
    }
}
