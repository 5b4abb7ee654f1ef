use super::*;

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model that owns the related record
    pub target: ModelId,

    /// `field` is the foreign-key column on the source model; `references`
    /// is the identity-key column on the target.
    pub foreign_key: ForeignKey,
}

impl BelongsTo {
    pub fn target<'a>(&self, schema: &'a crate::Schema) -> &'a Model {
        schema.model(self.target)
    }

    /// Select the target records whose identity keys appear among the source
    /// records' foreign-key values.
    pub fn derive_query(&self, source: &Model, records: &[Record]) -> stmt::Query {
        debug_assert_eq!(source.id, self.foreign_key.field.model);

        let keys = super::distinct_keys(records, self.foreign_key.field);
        super::membership_query(source.id, self.target, self.foreign_key.references, keys)
    }
}
