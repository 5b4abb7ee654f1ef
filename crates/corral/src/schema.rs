mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldId};

mod method;
pub use method::ModelMethod;

mod model;
pub use model::{Model, ModelId};

pub mod relation;
pub use relation::{BelongsTo, ForeignKey, HasMany, Relation};

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.values().find(|model| model.name == name)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }
}
