//! Schema snapshot serialization
//!
//! A [`SchemaSnapshot`] is the JSON form of a schema description. The
//! external introspection step writes one of these; the deriver only ever
//! reads them. Snapshots are regenerated wholesale when the schema changes,
//! so they carry a format version but no identity or history.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: &str = "1";

/// Serialized schema description.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSnapshot {
    /// Snapshot format version (currently "1")
    pub version: String,

    /// The schema description
    #[serde(flatten)]
    pub schema: Schema,
}

impl SchemaSnapshot {
    /// Wrap a schema description in the current snapshot format
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            schema,
        }
    }

    /// Unwrap the schema description
    #[must_use]
    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Load a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a snapshot from a file
    pub fn load(path: &std::path::Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save the snapshot to a file
    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

impl Default for SchemaSnapshot {
    fn default() -> Self {
        Self::new(Schema::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use crate::relation::{Cardinality, Relation};
    use crate::scalar::ScalarType;
    use crate::table::Table;

    fn sample() -> SchemaSnapshot {
        SchemaSnapshot::new(
            Schema::new()
                .with_table(
                    Table::new("movies")
                        .with_column(
                            Column::new("id", ScalarType::BigInt).not_null().generated(),
                        )
                        .with_column(Column::new("name", ScalarType::Text).not_null())
                        .with_column(Column::new("data", ScalarType::Json)),
                )
                .with_relation(
                    Relation::new("reviews", "movies", "reviews", Cardinality::Many)
                        .with_columns(["id"])
                        .with_references(["movie_id"]),
                ),
        )
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        let parsed = SchemaSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_json_field_spelling() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"version\": \"1\""));
        assert!(json.contains("\"notNull\": true"));
        assert!(json.contains("\"type\": \"bigint\""));
        assert!(json.contains("\"cardinality\": \"many\""));
    }

    #[test]
    fn test_missing_flags_default() {
        let json = r#"{
            "version": "1",
            "tables": [
                {"name": "notes", "columns": [{"name": "body", "type": "text"}]}
            ]
        }"#;
        let snapshot = SchemaSnapshot::from_json(json).unwrap();
        let column = &snapshot.schema.tables[0].columns[0];
        assert!(!column.not_null);
        assert!(!column.generated);
        assert!(column.default.is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");

        let snapshot = sample();
        snapshot.save(&path).unwrap();
        let loaded = SchemaSnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_rejects_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "not json").unwrap();

        let err = SchemaSnapshot::load(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
