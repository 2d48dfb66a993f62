//! Rust source generation for derived shapes
//!
//! Renders the shapes derived by `rowshape-core` as Rust struct
//! definitions a consuming crate can compile against. This makes the
//! shape contract literal: nullable columns become `Option<T>`, optional
//! write fields become `Option<T>`, and forbidden (generated) columns are
//! omitted from write structs entirely, so supplying one is a compile
//! error at the call site.
//!
//! Generation is an offline or build-time step; the output is plain
//! source text, written wherever the caller wants it.

mod render;

pub use render::{CodegenOptions, GeneratedTypes, generate_projected, generate_types};
