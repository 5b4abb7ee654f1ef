use super::Collection;
use crate::{
    schema::{ModelId, ModelMethod, Relation},
    stmt::Value,
    Error, Result,
};

/// The outcome of a dynamically dispatched accessor.
#[derive(Debug)]
pub enum Dispatch {
    /// A model-method accessor resolved to the bound model itself
    Model(ModelId),

    /// A model-method accessor produced a plain value
    Value(Value),

    /// A relation accessor produced a new, unloaded collection
    Collection(Collection),
}

/// Where in the resolution chain an accessor name landed.
enum Resolution<'a> {
    Method(ModelMethod),
    Relation(&'a Relation),
}

impl Collection {
    /// True if `name` resolves to a model method or a registered relation.
    /// Never triggers loading.
    pub fn responds_to(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Dispatch an accessor not defined directly on the collection.
    ///
    /// Resolution is an ordered chain: model methods first, then the model's
    /// relation table, then failure with an unknown-accessor error. Model
    /// methods delegate without loading. Relation accessors must inspect
    /// member keys, so they load this collection, derive the related query
    /// through the descriptor, and wrap it in a new unloaded collection bound
    /// to the same repository.
    pub async fn invoke(&self, name: &str) -> Result<Dispatch> {
        let model = self.model();

        match self.resolve(name) {
            Some(Resolution::Method(method)) => Ok(match method {
                ModelMethod::Model => Dispatch::Model(model.id),
                ModelMethod::Name => Dispatch::Value(model.name.as_str().into()),
                ModelMethod::Fields => Dispatch::Value(Value::List(
                    model
                        .fields
                        .iter()
                        .map(|field| field.name.as_str().into())
                        .collect(),
                )),
                ModelMethod::PrimaryKey => {
                    Dispatch::Value(model.primary_key_field().name.as_str().into())
                }
            }),
            Some(Resolution::Relation(relation)) => {
                let records = self.entries().await?;

                let mut query = relation.derive_query(model, records);
                query.repository = self.query().repository.clone();

                Ok(Dispatch::Collection(Collection::new(
                    self.repository().clone(),
                    query,
                )))
            }
            None => Err(Error::unknown_accessor(&model.name, name)),
        }
    }

    fn resolve(&self, name: &str) -> Option<Resolution<'_>> {
        if let Some(method) = ModelMethod::lookup(name) {
            return Some(Resolution::Method(method));
        }

        self.model().relation(name).map(Resolution::Relation)
    }
}

impl Dispatch {
    pub fn as_model(&self) -> Option<ModelId> {
        match self {
            Self::Model(model) => Some(*model),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_collection(self) -> Option<Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    #[track_caller]
    pub fn unwrap_collection(self) -> Collection {
        match self {
            Self::Collection(collection) => collection,
            v => panic!("expected `Collection`, found {v:#?}"),
        }
    }
}
