use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SourceModel {
    /// The source model
    pub model: ModelId,

    /// Set when the source must be distinguished from another occurrence of
    /// the same model in the query, e.g. the target side of a
    /// self-referential relation.
    pub alias: Option<Alias>,
}

impl SourceModel {
    pub fn aliased(model: ModelId, alias: Alias) -> Self {
        Self {
            model,
            alias: Some(alias),
        }
    }
}

impl From<ModelId> for SourceModel {
    fn from(model: ModelId) -> Self {
        Self { model, alias: None }
    }
}
