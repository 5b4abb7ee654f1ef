use super::{Field, FieldId, Relation};
use crate::stmt;

use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Primitive fields contained by the model, in column order
    pub fields: Vec<Field>,

    /// The field holding the model's identity key
    pub primary_key: FieldId,

    /// Relations registered on the model, keyed by accessor name
    pub relations: IndexMap<String, Relation>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn primary_key_field(&self) -> &Field {
        &self.fields[self.primary_key.index]
    }

    /// Look up a relation by accessor name.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// A query selecting every record of the model.
    pub fn all(&self) -> stmt::Query {
        stmt::Query::filter(self.id, true)
    }

    /// A query selecting records of the model matching `filter`.
    pub fn filter(&self, filter: impl Into<stmt::Expr>) -> stmt::Query {
        stmt::Query::filter(self.id, filter)
    }

    /// A query selecting the record with the given identity key.
    pub fn find_by_key(&self, key: impl Into<stmt::Value>) -> stmt::Query {
        stmt::Query::filter(
            self.id,
            stmt::Expr::eq(self.primary_key, stmt::Expr::value(key)),
        )
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
