//! Column description types
//!
//! This module provides two complementary types:
//! - [`ColumnDef`] - A const-friendly definition type for compile-time schema descriptions
//! - [`Column`] - A runtime type for serde serialization/deserialization
//!
//! A column carries the declared flags from the catalog (`not_null`,
//! `default`, `generated`); [`Column::mode`] collapses them into the
//! [`ColumnMode`] classification the write-shape derivations match on.

use std::borrow::Cow;

use crate::scalar::ScalarType;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_option_from_string};

// =============================================================================
// Write-shape classification
// =============================================================================

/// How a column participates in write payloads.
///
/// Derived from the declared flags with the precedence
/// generated > nullable > default, so shape derivation is an exhaustive
/// match instead of ad hoc flag tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnMode {
    /// Value computed by the engine; callers must never supply it
    Generated,
    /// NOT NULL with no default; must be supplied on insert
    Required,
    /// NOT NULL with a default; may be omitted on insert
    HasDefault,
    /// Nullable; always omissible
    Nullable,
}

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly column definition for compile-time schema descriptions.
///
/// # Examples
///
/// ```
/// use rowshape_types::{ColumnDef, ScalarType};
///
/// const COLUMNS: &[ColumnDef] = &[
///     ColumnDef::new("id", ScalarType::BigInt).not_null().generated(),
///     ColumnDef::new("name", ScalarType::Text).not_null(),
///     ColumnDef::new("data", ScalarType::Json),
/// ];
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    /// Column name
    pub name: &'static str,
    /// Value domain
    pub ty: ScalarType,
    /// Is this column NOT NULL?
    pub not_null: bool,
    /// Default expression (if any)
    pub default: Option<&'static str>,
    /// Is the value computed by the engine?
    pub generated: bool,
}

impl ColumnDef {
    /// Create a new column definition
    #[must_use]
    pub const fn new(name: &'static str, ty: ScalarType) -> Self {
        Self {
            name,
            ty,
            not_null: false,
            default: None,
            generated: false,
        }
    }

    /// Set NOT NULL
    #[must_use]
    pub const fn not_null(self) -> Self {
        Self {
            not_null: true,
            ..self
        }
    }

    /// Set the default expression
    #[must_use]
    pub const fn default_value(self, value: &'static str) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    /// Mark the value as engine-computed
    #[must_use]
    pub const fn generated(self) -> Self {
        Self {
            generated: true,
            ..self
        }
    }

    /// Convert to runtime [`Column`] type
    #[must_use]
    pub const fn into_column(self) -> Column {
        Column {
            name: Cow::Borrowed(self.name),
            ty: self.ty,
            not_null: self.not_null,
            default: match self.default {
                Some(s) => Some(Cow::Borrowed(s)),
                None => None,
            },
            generated: self.generated,
        }
    }
}

impl Default for ColumnDef {
    fn default() -> Self {
        Self::new("", ScalarType::Text)
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime column entity for serde serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    /// Column name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Value domain
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: ScalarType,

    /// Is this column NOT NULL?
    #[cfg_attr(feature = "serde", serde(default))]
    pub not_null: bool,

    /// Default expression
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "cow_option_from_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub default: Option<Cow<'static, str>>,

    /// Is the value computed by the engine?
    #[cfg_attr(feature = "serde", serde(default))]
    pub generated: bool,
}

impl Column {
    /// Create a new column (runtime)
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, ty: ScalarType) -> Self {
        Self {
            name: name.into(),
            ty,
            not_null: false,
            default: None,
            generated: false,
        }
    }

    /// Set NOT NULL
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Set the default expression
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Mark the value as engine-computed
    #[must_use]
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    /// Get the column name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a read may yield an absent value
    #[inline]
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !self.not_null
    }

    /// Classify how this column participates in write payloads
    #[must_use]
    pub fn mode(&self) -> ColumnMode {
        if self.generated {
            ColumnMode::Generated
        } else if !self.not_null {
            ColumnMode::Nullable
        } else if self.default.is_some() {
            ColumnMode::HasDefault
        } else {
            ColumnMode::Required
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new("", ScalarType::Text)
    }
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        def.into_column()
    }
}
