//! Schema description types for rowshape
//!
//! This crate defines the static, structural description of a database
//! schema that the shape deriver consumes:
//!
//! - [`ScalarType`] - The semantic value domain of a column
//! - [`Column`] / [`ColumnDef`] - Column metadata (nullability, default, generated)
//! - [`Table`] / [`TableDef`] - A table or view with its ordered columns
//! - [`Relation`] / [`RelationDef`] - A foreign-key relationship with explicit [`Cardinality`]
//! - [`Schema`] - The container handed to the deriver
//! - [`SchemaSnapshot`] - The serialized (JSON) form of a schema description
//!
//! The description is produced once, externally - conventionally by
//! introspecting a live database catalog - and is immutable input here.
//! Well-formedness (unique column names, relations referencing known
//! tables) is the producer's contract; this crate does not validate it.
//!
//! # Features
//!
//! - `serde` - Serialization support for descriptions and snapshots (enabled by default)

mod column;
mod relation;
mod scalar;
mod schema;
mod table;

#[cfg(feature = "serde")]
pub mod serde_helpers;
#[cfg(feature = "serde")]
mod snapshot;

pub use column::{Column, ColumnDef, ColumnMode};
pub use relation::{Cardinality, Relation, RelationDef};
pub use scalar::ScalarType;
pub use schema::Schema;
pub use table::{Table, TableDef};

#[cfg(feature = "serde")]
pub use snapshot::{SNAPSHOT_VERSION, SchemaSnapshot};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Cardinality, Column, ColumnMode, Relation, ScalarType, Schema, Table};

    #[cfg(feature = "serde")]
    pub use crate::SchemaSnapshot;
}
