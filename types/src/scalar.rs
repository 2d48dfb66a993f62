//! Scalar value domains
//!
//! [`ScalarType`] is the closed set of semantic column domains the deriver
//! understands. Catalog spellings (including the usual aliases: `int8`,
//! `timestamptz`, `jsonb`, ...) are parsed with [`ScalarType::from_sql_type`];
//! the serial spellings map to their integer domain, since omissibility on
//! insert comes from the default-presence flag, not from the type name.

use core::fmt;

/// The semantic value domain of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScalarType {
    /// BOOLEAN - true/false
    Boolean,

    /// SMALLINT - 16-bit signed integer
    SmallInt,

    /// INTEGER - 32-bit signed integer
    Integer,

    /// BIGINT - 64-bit signed integer
    BigInt,

    /// REAL - single precision floating-point number
    Real,

    /// DOUBLE PRECISION - double precision floating-point number
    #[cfg_attr(feature = "serde", serde(rename = "double precision"))]
    DoublePrecision,

    /// NUMERIC - exact numeric with selectable precision
    Numeric,

    /// TEXT - variable-length character string
    #[default]
    Text,

    /// UUID
    Uuid,

    /// DATE - calendar date
    Date,

    /// TIME - time of day
    Time,

    /// TIMESTAMP - date and time without time zone
    Timestamp,

    /// TIMESTAMPTZ - date and time with time zone
    #[cfg_attr(feature = "serde", serde(rename = "timestamptz"))]
    TimestampTz,

    /// JSON or JSONB document
    Json,

    /// BYTEA / BLOB - raw bytes
    Bytes,
}

impl ScalarType {
    /// Get the canonical SQL spelling
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Real => "real",
            Self::DoublePrecision => "double precision",
            Self::Numeric => "numeric",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamptz",
            Self::Json => "json",
            Self::Bytes => "bytea",
        }
    }

    /// Parse a catalog type spelling, accepting common aliases.
    ///
    /// Returns `None` for spellings outside the supported domains.
    /// Parenthesized modifiers (`varchar(255)`, `numeric(10, 2)`) are ignored.
    #[must_use]
    pub fn from_sql_type(type_str: &str) -> Option<Self> {
        let base = match type_str.find('(') {
            Some(pos) => &type_str[..pos],
            None => type_str,
        };

        match base.trim().to_lowercase().as_str() {
            "bool" | "boolean" => Some(Self::Boolean),
            "smallint" | "int2" | "smallserial" => Some(Self::SmallInt),
            "int" | "integer" | "int4" | "serial" => Some(Self::Integer),
            "bigint" | "int8" | "bigserial" => Some(Self::BigInt),
            "real" | "float4" => Some(Self::Real),
            "double precision" | "float8" | "double" => Some(Self::DoublePrecision),
            "numeric" | "decimal" => Some(Self::Numeric),
            "text" | "varchar" | "character varying" | "char" | "character" | "citext" => {
                Some(Self::Text)
            }
            "uuid" => Some(Self::Uuid),
            "date" => Some(Self::Date),
            "time" | "time without time zone" | "timetz" | "time with time zone" => {
                Some(Self::Time)
            }
            "timestamp" | "timestamp without time zone" => Some(Self::Timestamp),
            "timestamptz" | "timestamp with time zone" => Some(Self::TimestampTz),
            "json" | "jsonb" => Some(Self::Json),
            "bytea" | "blob" => Some(Self::Bytes),
            _ => None,
        }
    }

    /// Get the Rust spelling used by generated code.
    ///
    /// Calendar, numeric, and uuid domains render as `String` (their wire
    /// spelling); `Json` renders through the `Json` alias emitted by codegen.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::SmallInt => "i16",
            Self::Integer => "i32",
            Self::BigInt => "i64",
            Self::Real => "f32",
            Self::DoublePrecision => "f64",
            Self::Numeric | Self::Text | Self::Uuid => "String",
            Self::Date | Self::Time | Self::Timestamp | Self::TimestampTz => "String",
            Self::Json => "Json",
            Self::Bytes => "Vec<u8>",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sql_type_aliases() {
        assert_eq!(ScalarType::from_sql_type("int8"), Some(ScalarType::BigInt));
        assert_eq!(
            ScalarType::from_sql_type("bigserial"),
            Some(ScalarType::BigInt)
        );
        assert_eq!(ScalarType::from_sql_type("serial"), Some(ScalarType::Integer));
        assert_eq!(ScalarType::from_sql_type("jsonb"), Some(ScalarType::Json));
        assert_eq!(
            ScalarType::from_sql_type("timestamp with time zone"),
            Some(ScalarType::TimestampTz)
        );
        assert_eq!(ScalarType::from_sql_type("geometry"), None);
    }

    #[test]
    fn test_from_sql_type_ignores_modifiers() {
        assert_eq!(
            ScalarType::from_sql_type("varchar(255)"),
            Some(ScalarType::Text)
        );
        assert_eq!(
            ScalarType::from_sql_type("NUMERIC(10, 2)"),
            Some(ScalarType::Numeric)
        );
    }

    #[test]
    fn test_rust_type() {
        assert_eq!(ScalarType::BigInt.rust_type(), "i64");
        assert_eq!(ScalarType::Text.rust_type(), "String");
        assert_eq!(ScalarType::Json.rust_type(), "Json");
        assert_eq!(ScalarType::Bytes.rust_type(), "Vec<u8>");
    }

    #[test]
    fn test_as_sql_round_trips() {
        for ty in [
            ScalarType::Boolean,
            ScalarType::SmallInt,
            ScalarType::Integer,
            ScalarType::BigInt,
            ScalarType::Real,
            ScalarType::DoublePrecision,
            ScalarType::Numeric,
            ScalarType::Text,
            ScalarType::Uuid,
            ScalarType::Date,
            ScalarType::Time,
            ScalarType::Timestamp,
            ScalarType::TimestampTz,
            ScalarType::Json,
            ScalarType::Bytes,
        ] {
            assert_eq!(ScalarType::from_sql_type(ty.as_sql()), Some(ty));
        }
    }
}
