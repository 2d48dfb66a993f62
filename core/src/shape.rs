//! Derived type shapes
//!
//! A [`Shape`] is the structural output of a derivation: the table it came
//! from, the kind of access it describes, and an ordered list of fields.
//! Shapes are plain values - an output boundary consumed by query-typing
//! layers and by codegen - and serialize under the `serde` feature.

use std::borrow::Cow;

use rowshape_types::ScalarType;

/// How a field may appear in a write payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Presence {
    /// Must be supplied
    Required,
    /// May be omitted
    Optional,
    /// Must be omitted; supplying a value is a type error at the call site
    Forbidden,
}

/// Which access pattern a shape describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    /// A successfully read record
    Row,
    /// The payload accepted when creating a record
    Insert,
    /// The payload accepted when partially modifying a record
    Update,
    /// A row shape restricted to a projection
    Projected,
}

/// The type of a single shape field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeTy {
    /// A scalar value domain
    Scalar(ScalarType),
    /// One-to-many relation: a sequence of nested rows
    Many(Box<Shape>),
    /// Many-to-one relation: at most one nested row
    One(Box<Shape>),
}

impl ShapeTy {
    /// Return the scalar domain, if this is a scalar field
    #[must_use]
    pub fn as_scalar(&self) -> Option<ScalarType> {
        match self {
            Self::Scalar(ty) => Some(*ty),
            _ => None,
        }
    }

    /// Return the nested shape, if this is a relation field
    #[must_use]
    pub fn as_nested(&self) -> Option<&Shape> {
        match self {
            Self::Scalar(_) => None,
            Self::Many(shape) | Self::One(shape) => Some(shape),
        }
    }

    /// True if this field carries a nested shape
    #[must_use]
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Many(_) | Self::One(_))
    }
}

/// A single field of a derived shape.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShapeField {
    /// Field name (the column or relation name)
    pub name: Cow<'static, str>,

    /// Field type
    pub ty: ShapeTy,

    /// Whether the value may be absent (`null` on read, explicit null on write)
    pub nullable: bool,

    /// How the field participates in a write payload
    pub presence: Presence,
}

impl ShapeField {
    /// Get the field name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the field must be supplied
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// True if the field may be omitted
    #[inline]
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.presence == Presence::Optional
    }

    /// True if the field must be omitted
    #[inline]
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.presence == Presence::Forbidden
    }
}

/// A derived type shape.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Shape {
    /// Name of the table the shape was derived from
    pub table: Cow<'static, str>,

    /// Which access pattern the shape describes
    pub kind: ShapeKind,

    /// Ordered fields
    pub fields: Vec<ShapeField>,
}

impl Shape {
    /// Look up a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ShapeField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterate the field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let shape = Shape {
            table: "movies".into(),
            kind: ShapeKind::Row,
            fields: vec![ShapeField {
                name: "id".into(),
                ty: ShapeTy::Scalar(ScalarType::BigInt),
                nullable: false,
                presence: Presence::Required,
            }],
        };

        assert!(shape.field("id").is_some());
        assert!(shape.field("missing").is_none());
        assert_eq!(shape.field_names().collect::<Vec<_>>(), ["id"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_shape_serializes() {
        let shape = Shape {
            table: "movies".into(),
            kind: ShapeKind::Insert,
            fields: vec![ShapeField {
                name: "id".into(),
                ty: ShapeTy::Scalar(ScalarType::BigInt),
                nullable: false,
                presence: Presence::Forbidden,
            }],
        };

        let value = serde_json::to_value(&shape).unwrap();
        assert_eq!(value["kind"], "insert");
        assert_eq!(value["fields"][0]["presence"], "forbidden");
        assert_eq!(value["fields"][0]["ty"]["scalar"], "bigint");
    }

    #[test]
    fn test_shape_ty_accessors() {
        let scalar = ShapeTy::Scalar(ScalarType::Text);
        assert_eq!(scalar.as_scalar(), Some(ScalarType::Text));
        assert!(!scalar.is_relation());

        let nested = ShapeTy::Many(Box::new(Shape {
            table: "cities".into(),
            kind: ShapeKind::Projected,
            fields: Vec::new(),
        }));
        assert!(nested.is_relation());
        assert_eq!(nested.as_nested().unwrap().table, "cities");
    }
}
