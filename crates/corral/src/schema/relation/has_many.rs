use super::*;

#[derive(Debug, Clone)]
pub struct HasMany {
    /// Associated model
    pub target: ModelId,

    /// `field` is the foreign-key column on the target model; `references`
    /// is the identity-key column on the source.
    pub foreign_key: ForeignKey,
}

impl HasMany {
    pub fn target<'a>(&self, schema: &'a crate::Schema) -> &'a Model {
        schema.model(self.target)
    }

    /// Select the target records whose foreign keys reference one of the
    /// source records' identity keys.
    pub fn derive_query(&self, source: &Model, records: &[Record]) -> stmt::Query {
        debug_assert_eq!(source.id, self.foreign_key.references.model);

        let keys = super::distinct_keys(records, self.foreign_key.references);
        super::membership_query(source.id, self.target, self.foreign_key.field, keys)
    }
}
