//! Shape derivation for rowshape
//!
//! Pure translation from a table description (and optionally a
//! [`Projection`]) to the corresponding type shapes:
//!
//! - [`row_shape`] - the type describing a successfully read record
//! - [`insert_shape`] - the payload accepted when creating a record
//! - [`update_shape`] - the payload accepted when partially modifying a record
//! - [`projected_shape`] - the row shape restricted to a projection,
//!   recursing into nested relation selections
//!
//! Every derivation is stateless and referentially transparent: no I/O, no
//! shared mutable state, no coordination needed between concurrent callers.
//! Deriving twice from the same description yields structurally identical
//! shapes.
//!
//! # Features
//!
//! - `serde` - Serialization for projections and derived shapes (enabled by default)
//! - `tracing` - Emit a debug event per derivation via the `tracing` crate

pub mod error;
pub mod projection;
pub mod shape;
mod trace;

mod derive;

pub use derive::{insert_shape, projected_shape, row_shape, update_shape};
pub use error::{Result, ShapeError};
pub use projection::{ColumnSelection, Projection, ProjectionEntry};
pub use shape::{Presence, Shape, ShapeField, ShapeKind, ShapeTy};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::derive::{insert_shape, projected_shape, row_shape, update_shape};
    pub use crate::error::{Result, ShapeError};
    pub use crate::projection::{ColumnSelection, Projection};
    pub use crate::shape::{Presence, Shape, ShapeField, ShapeKind, ShapeTy};
}
