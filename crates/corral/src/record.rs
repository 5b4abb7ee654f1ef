use crate::{
    schema::{FieldId, Model, ModelId},
    stmt::{Value, ValueRecord},
    Error, Result,
};

/// One materialized or in-memory model instance.
///
/// Values are stored in field declaration order, one per primitive field.
#[derive(Debug, Clone)]
pub struct Record {
    model: ModelId,

    /// Index of the identity-key field, copied from the model so equality
    /// needs no schema access.
    pk: usize,

    values: ValueRecord,
}

impl Record {
    /// Materialize a record from a raw row.
    ///
    /// The row must have one value per declared field, each inhabiting the
    /// field's type; `Null` stands for an unset value. Violations fail with
    /// a schema mismatch.
    pub fn load(model: &Model, row: impl Into<ValueRecord>) -> Result<Self> {
        let row = row.into();

        if row.len() != model.fields.len() {
            return Err(Error::schema_mismatch(format!(
                "expected {} columns for `{}`, got {}",
                model.fields.len(),
                model.name,
                row.len()
            )));
        }

        for (field, value) in model.fields.iter().zip(row.iter()) {
            if let Some(ty) = value.ty() {
                if ty != field.ty {
                    return Err(Error::schema_mismatch(format!(
                        "field `{}::{}` declares {}, row has {}",
                        model.name, field.name, field.ty, ty
                    )));
                }
            } else if !value.is_null() {
                return Err(Error::schema_mismatch(format!(
                    "field `{}::{}` cannot hold a composite value",
                    model.name, field.name
                )));
            }
        }

        Ok(Self {
            model: model.id,
            pk: model.primary_key.index,
            values: row,
        })
    }

    /// Construct an in-memory record from attribute name/value pairs.
    ///
    /// Unnamed fields are left `Null`; naming an unknown property fails with
    /// a schema mismatch.
    pub fn new<'a>(
        model: &Model,
        attrs: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Self> {
        let mut values = vec![Value::Null; model.fields.len()];

        for (name, value) in attrs {
            let field = model.field_by_name(name).ok_or_else(|| {
                Error::schema_mismatch(format!(
                    "unknown property `{name}` on `{}`",
                    model.name
                ))
            })?;
            values[field.id.index] = value;
        }

        Self::load(model, values)
    }

    pub fn model_id(&self) -> ModelId {
        self.model
    }

    /// The value of the field, by ID.
    #[track_caller]
    pub fn field(&self, field: impl Into<FieldId>) -> &Value {
        let field = field.into();
        assert_eq!(self.model, field.model);
        &self.values[field.index]
    }

    /// The value of the named field, resolved through the model.
    pub fn get<'a>(&'a self, model: &Model, name: &str) -> Option<&'a Value> {
        assert_eq!(self.model, model.id);
        model
            .field_by_name(name)
            .map(|field| &self.values[field.id.index])
    }

    /// The record's identity key. `Null` if the record has not been assigned
    /// one.
    pub fn key(&self) -> &Value {
        &self.values[self.pk]
    }

    /// True if the record has no identity key yet.
    pub fn is_new(&self) -> bool {
        self.key().is_null()
    }

    pub fn values(&self) -> &ValueRecord {
        &self.values
    }
}

/// Records of the same model with identity keys assigned compare by key
/// alone; otherwise comparison falls back to structural equality.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        if self.model != other.model {
            return false;
        }

        let (lhs, rhs) = (self.key(), other.key());
        if lhs.is_null() || rhs.is_null() {
            self.values == other.values
        } else {
            lhs == rhs
        }
    }
}

impl Eq for Record {}
