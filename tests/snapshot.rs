//! Snapshot input boundary
//!
//! A schema description arrives as JSON written by an external
//! introspection step. These tests feed the JSON form straight through
//! deserialization into shape derivation, and round-trip a description
//! through a file the way a build-time generation step would.

use rowshape::prelude::*;

/// The JSON an introspection producer would emit for the movies schema.
const MOVIES_SNAPSHOT: &str = r#"{
    "version": "1",
    "tables": [
        {
            "name": "movies",
            "columns": [
                {"name": "id", "type": "bigint", "notNull": true, "generated": true},
                {"name": "name", "type": "text", "notNull": true},
                {"name": "data", "type": "json"}
            ]
        },
        {
            "name": "reviews",
            "columns": [
                {"name": "id", "type": "bigint", "notNull": true, "generated": true},
                {"name": "movie_id", "type": "bigint", "notNull": true},
                {"name": "body", "type": "text"}
            ]
        }
    ],
    "relations": [
        {
            "name": "reviews",
            "table": "movies",
            "target": "reviews",
            "cardinality": "many",
            "columns": ["id"],
            "references": ["movie_id"]
        }
    ]
}"#;

#[test]
fn snapshot_feeds_shape_derivation() {
    let snapshot = SchemaSnapshot::from_json(MOVIES_SNAPSHOT).unwrap();
    let schema = snapshot.into_schema();

    let movies = schema.table("movies").unwrap();
    let insert = insert_shape(movies);
    assert!(insert.field("id").unwrap().is_forbidden());
    assert!(insert.field("name").unwrap().is_required());

    let projection = Projection::new()
        .column("name")
        .relation("reviews", Projection::new().column("body"));
    let shape = projected_shape(&schema, movies, &projection).unwrap();
    assert!(matches!(shape.field("reviews").unwrap().ty, ShapeTy::Many(_)));
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = SchemaSnapshot::from_json(MOVIES_SNAPSHOT).unwrap();
    let json = snapshot.to_json().unwrap();
    let reparsed = SchemaSnapshot::from_json(&json).unwrap();
    assert_eq!(reparsed, snapshot);
}

#[test]
fn snapshot_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");

    let snapshot = SchemaSnapshot::from_json(MOVIES_SNAPSHOT).unwrap();
    snapshot.save(&path).unwrap();

    let loaded = SchemaSnapshot::load(&path).unwrap();
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.version, rowshape::SNAPSHOT_VERSION);
}

#[test]
fn regenerated_snapshot_derives_identical_shapes() {
    let first = SchemaSnapshot::from_json(MOVIES_SNAPSHOT).unwrap().into_schema();
    let second = SchemaSnapshot::from_json(MOVIES_SNAPSHOT).unwrap().into_schema();

    let a = row_shape(first.table("movies").unwrap());
    let b = row_shape(second.table("movies").unwrap());
    assert_eq!(a, b);
}
