//! Tracing utilities for shape-derivation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro no-ops when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event with the table, shape kind, and field count.
///
/// ```ignore
/// rowshape_trace_shape!(table.name(), "row", fields.len());
/// ```
#[macro_export]
macro_rules! rowshape_trace_shape {
    ($table:expr, $kind:expr, $field_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %$table, kind = $kind, fields = $field_count, "rowshape.derive");
    };
}
