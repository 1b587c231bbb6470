//! Record shape description and column descriptor extraction.
//!
//! A [`Record`] implementation is the caller's ahead-of-time description of
//! one struct: its name, its fields in declaration order, and the raw
//! annotation string on each field. [`TypeDescriptor::of`] validates that
//! description and normalizes it into the column list every later stage
//! (DDL building, row coercion, insertion) works from.

use std::fmt;

use crate::error::Error;
use crate::tag::{self, Tag};

/// Declared Rust type of one record field.
///
/// [`FieldType::Other`] names any declared type outside the supported set so
/// that extraction can report it instead of silently skipping the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Text,
    /// `Option<T>` around another declared type
    Optional(Box<FieldType>),
    /// Any other declared type, carrying its name for error reporting
    Other(&'static str),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Bool => write!(f, "bool"),
            FieldType::I8 => write!(f, "i8"),
            FieldType::I16 => write!(f, "i16"),
            FieldType::I32 => write!(f, "i32"),
            FieldType::I64 => write!(f, "i64"),
            FieldType::F32 => write!(f, "f32"),
            FieldType::F64 => write!(f, "f64"),
            FieldType::Text => write!(f, "String"),
            FieldType::Optional(inner) => write!(f, "Option<{inner}>"),
            FieldType::Other(name) => write!(f, "{name}"),
        }
    }
}

/// One declared struct field: name, declared type, raw annotation string.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    /// Raw constraint annotation, e.g. `"primarykey"` or `""`
    pub annotation: &'static str,
}

impl FieldSpec {
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            annotation: "",
        }
    }

    pub fn with_annotation(name: &'static str, ty: FieldType, annotation: &'static str) -> Self {
        Self {
            name,
            ty,
            annotation,
        }
    }
}

/// Underlying shape of a described type.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// A struct with named fields in declaration order
    Struct(Vec<FieldSpec>),
    /// Anything else (enum, tuple, scalar), carrying its kind for errors
    Other(&'static str),
}

/// Complete description of one record type.
#[derive(Debug, Clone)]
pub struct RecordShape {
    /// Type name; becomes the table name
    pub type_name: &'static str,
    pub kind: ShapeKind,
}

/// A type that can describe its own shape for table synthesis.
///
/// Implementations mirror the struct declaration field for field:
///
/// ```
/// use csvql::{FieldSpec, FieldType, Record, RecordShape, ShapeKind};
///
/// struct Employee {
///     id: i64,
///     name: String,
///     manager_id: Option<i64>,
/// }
///
/// impl Record for Employee {
///     fn shape() -> RecordShape {
///         RecordShape {
///             type_name: "Employee",
///             kind: ShapeKind::Struct(vec![
///                 FieldSpec::with_annotation("id", FieldType::I64, "primarykey"),
///                 FieldSpec::new("name", FieldType::Text),
///                 FieldSpec::new("manager_id", FieldType::Optional(Box::new(FieldType::I64))),
///             ]),
///         }
///     }
/// }
/// ```
pub trait Record {
    fn shape() -> RecordShape;
}

/// SQL classification of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Bool,
    Int,
    Float,
    String,
}

/// One table column derived from a record field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Column name (the field's declared name)
    pub name: String,
    pub semantic_type: SemanticType,
    /// True iff the field is an `Option` of a supported base type
    pub nullable: bool,
    /// Constraint tags in annotation order
    pub tags: Vec<Tag>,
}

/// Validated, ordered column list for one record type.
///
/// Field order equals declaration order and is the positional contract shared
/// by the CREATE TABLE column list, the INSERT placeholders, and the CSV
/// field-to-column mapping. Immutable once built.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub table_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Extracts the descriptor for a [`Record`] type.
    ///
    /// Fails with a Validation-kind error before any I/O if the type is not
    /// a struct, has no fields, or declares a field of unsupported type.
    pub fn of<T: Record>() -> Result<Self, Error> {
        Self::from_shape(T::shape())
    }

    /// Extracts a descriptor from an explicit shape description.
    pub fn from_shape(shape: RecordShape) -> Result<Self, Error> {
        let specs = match shape.kind {
            ShapeKind::Struct(specs) => specs,
            ShapeKind::Other(_) => {
                return Err(Error::NotAStruct {
                    type_name: shape.type_name.to_string(),
                });
            }
        };
        if specs.is_empty() {
            return Err(Error::NoFields {
                type_name: shape.type_name.to_string(),
            });
        }

        let mut fields = Vec::with_capacity(specs.len());
        for spec in &specs {
            let (semantic_type, nullable) =
                classify(&spec.ty).ok_or_else(|| Error::UnsupportedFieldType {
                    type_name: shape.type_name.to_string(),
                    field: spec.name.to_string(),
                    declared: spec.ty.to_string(),
                })?;
            fields.push(FieldDescriptor {
                name: spec.name.to_string(),
                semantic_type,
                nullable,
                tags: tag::parse_annotation(spec.annotation),
            });
        }

        Ok(Self {
            table_name: shape.type_name.to_string(),
            fields,
        })
    }
}

/// Maps a declared type to its SQL classification and nullability.
///
/// Exactly one level of `Option` is supported; `Option<Option<_>>` and any
/// `Other` type have no SQL rendering and return `None`.
fn classify(ty: &FieldType) -> Option<(SemanticType, bool)> {
    match ty {
        FieldType::Bool => Some((SemanticType::Bool, false)),
        FieldType::I8 | FieldType::I16 | FieldType::I32 | FieldType::I64 => {
            Some((SemanticType::Int, false))
        }
        FieldType::F32 | FieldType::F64 => Some((SemanticType::Float, false)),
        FieldType::Text => Some((SemanticType::String, false)),
        FieldType::Optional(inner) => match classify(inner) {
            Some((semantic, false)) => Some((semantic, true)),
            // Option<Option<_>> or Option<unsupported>
            _ => None,
        },
        FieldType::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn struct_shape(name: &'static str, specs: Vec<FieldSpec>) -> RecordShape {
        RecordShape {
            type_name: name,
            kind: ShapeKind::Struct(specs),
        }
    }

    #[test]
    fn all_base_types_classify() {
        let shape = struct_shape(
            "Everything",
            vec![
                FieldSpec::new("a", FieldType::Bool),
                FieldSpec::new("b", FieldType::I8),
                FieldSpec::new("c", FieldType::I16),
                FieldSpec::new("d", FieldType::I32),
                FieldSpec::new("e", FieldType::I64),
                FieldSpec::new("f", FieldType::F32),
                FieldSpec::new("g", FieldType::F64),
                FieldSpec::new("h", FieldType::Text),
            ],
        );
        let desc = TypeDescriptor::from_shape(shape).unwrap();
        let semantics: Vec<_> = desc.fields.iter().map(|f| f.semantic_type).collect();
        assert_eq!(
            semantics,
            vec![
                SemanticType::Bool,
                SemanticType::Int,
                SemanticType::Int,
                SemanticType::Int,
                SemanticType::Int,
                SemanticType::Float,
                SemanticType::Float,
                SemanticType::String,
            ]
        );
        assert!(desc.fields.iter().all(|f| !f.nullable));
        assert_eq!(desc.table_name, "Everything");
    }

    #[test]
    fn optional_fields_are_nullable() {
        let shape = struct_shape(
            "Person",
            vec![
                FieldSpec::new("id", FieldType::I64),
                FieldSpec::new(
                    "nickname",
                    FieldType::Optional(Box::new(FieldType::Text)),
                ),
            ],
        );
        let desc = TypeDescriptor::from_shape(shape).unwrap();
        assert!(!desc.fields[0].nullable);
        assert!(desc.fields[1].nullable);
        assert_eq!(desc.fields[1].semantic_type, SemanticType::String);
    }

    #[test]
    fn field_order_is_declaration_order() {
        let shape = struct_shape(
            "Ordered",
            vec![
                FieldSpec::new("z", FieldType::I64),
                FieldSpec::new("a", FieldType::Text),
                FieldSpec::new("m", FieldType::F64),
            ],
        );
        let desc = TypeDescriptor::from_shape(shape).unwrap();
        let names: Vec<_> = desc.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn non_struct_is_rejected() {
        let shape = RecordShape {
            type_name: "Count",
            kind: ShapeKind::Other("u64"),
        };
        let err = TypeDescriptor::from_shape(shape).unwrap_err();
        assert!(matches!(err, Error::NotAStruct { .. }));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn empty_struct_is_rejected() {
        let err = TypeDescriptor::from_shape(struct_shape("Unit", vec![])).unwrap_err();
        assert!(matches!(err, Error::NoFields { .. }));
    }

    #[test]
    fn unsupported_types_are_rejected() {
        for ty in [
            FieldType::Other("Vec<u8>"),
            FieldType::Optional(Box::new(FieldType::Other("uuid::Uuid"))),
            FieldType::Optional(Box::new(FieldType::Optional(Box::new(FieldType::I64)))),
        ] {
            let shape = struct_shape("Bad", vec![FieldSpec::new("payload", ty)]);
            let err = TypeDescriptor::from_shape(shape).unwrap_err();
            assert!(matches!(err, Error::UnsupportedFieldType { .. }), "{err}");
        }
    }

    #[test]
    fn annotations_become_tags() {
        let shape = struct_shape(
            "Tagged",
            vec![FieldSpec::with_annotation(
                "id",
                FieldType::I64,
                "PrimaryKey, unique",
            )],
        );
        let desc = TypeDescriptor::from_shape(shape).unwrap();
        assert_eq!(desc.fields[0].tags, vec![Tag::PrimaryKey, Tag::Unique]);
    }
}
