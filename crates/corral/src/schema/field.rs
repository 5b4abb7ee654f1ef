use super::ModelId;
use crate::stmt;

use std::fmt;

/// A primitive model property.
///
/// Relations are not fields; they live in the model's relation table and are
/// reached through dynamic dispatch. Each field maps to exactly one column in
/// a raw row, in declaration order.
#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the schema
    pub id: FieldId,

    /// Name of the field
    pub name: String,

    /// The field's primitive type
    pub ty: stmt::Type,

    /// Whether `Null` is an acceptable value
    pub nullable: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}

impl From<&Field> for FieldId {
    fn from(value: &Field) -> Self {
        value.id
    }
}
