use thiserror::Error;

/// Errors surfaced while deriving a projected shape.
///
/// These are the derivation-time rendition of a projection referencing
/// names the schema description does not define. Row, insert, and update
/// derivations are total over well-formed input and cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The projection names a table absent from the schema description
    #[error("unknown table `{0}`")]
    UnknownTable(String),

    /// The projection selects a column the table does not have
    #[error("unknown column `{column}` on table `{table}`")]
    UnknownColumn {
        /// Table being projected
        table: String,
        /// The missing column
        column: String,
    },

    /// The projection selects a relation the table does not have
    #[error("unknown relation `{relation}` on table `{table}`")]
    UnknownRelation {
        /// Table being projected
        table: String,
        /// The missing relation
        relation: String,
    },
}

/// Result type for shape derivation
pub type Result<T> = core::result::Result<T, ShapeError>;
