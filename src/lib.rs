//! # rowshape
//!
//! Derive row, insert, and update type shapes from a static database
//! schema description, plus nested join shapes for arbitrary projections.
//!
//! The schema description is produced once, externally (conventionally by
//! introspecting a live database catalog) and consumed here as plain
//! values; every derivation is pure and deterministic.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowshape::prelude::*;
//!
//! let movies = Table::new("movies")
//!     .with_column(Column::new("id", ScalarType::BigInt).not_null().generated())
//!     .with_column(Column::new("name", ScalarType::Text).not_null())
//!     .with_column(Column::new("data", ScalarType::Json));
//!
//! let insert = insert_shape(&movies);
//! assert!(insert.field("id").unwrap().is_forbidden());
//! assert!(insert.field("name").unwrap().is_required());
//! assert!(insert.field("data").unwrap().is_optional());
//! ```
//!
//! ## Features
//!
//! - `serde` - JSON schema snapshots and serializable shapes (enabled by default)
//! - `tracing` - Emit a debug event per derivation

pub use rowshape_core::{
    ColumnSelection, Presence, Projection, ProjectionEntry, Result, Shape, ShapeError, ShapeField,
    ShapeKind, ShapeTy, insert_shape, projected_shape, row_shape, update_shape,
};
pub use rowshape_types::{
    Cardinality, Column, ColumnDef, ColumnMode, Relation, RelationDef, ScalarType, Schema, Table,
    TableDef,
};

#[cfg(feature = "serde")]
pub use rowshape_types::{SNAPSHOT_VERSION, SchemaSnapshot};

pub use rowshape_codegen::{CodegenOptions, GeneratedTypes, generate_projected, generate_types};

/// Prelude module for commonly used types
pub mod prelude {
    pub use rowshape_codegen::{CodegenOptions, generate_projected, generate_types};
    pub use rowshape_core::prelude::*;
    pub use rowshape_types::prelude::*;
}
