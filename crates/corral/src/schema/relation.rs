mod belongs_to;
pub use belongs_to::BelongsTo;

mod has_many;
pub use has_many::HasMany;

use super::{FieldId, Model, ModelId};
use crate::{stmt, Record};

use indexmap::IndexSet;

/// Declares how two models relate and how to derive a query for the related
/// side from a set of source records.
///
/// Registered once per `(model, accessor name)` pair at schema-build time and
/// immutable thereafter.
#[derive(Debug, Clone)]
pub enum Relation {
    BelongsTo(BelongsTo),
    HasMany(HasMany),
}

/// A single-column foreign key: the child column and the parent column it
/// references.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    /// The foreign-key column, on the child model
    pub field: FieldId,

    /// The referenced column, on the parent model
    pub references: FieldId,
}

impl Relation {
    /// The model on the other side of the relation.
    pub fn target(&self) -> ModelId {
        match self {
            Self::BelongsTo(rel) => rel.target,
            Self::HasMany(rel) => rel.target,
        }
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self, Self::BelongsTo(_))
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self, Self::HasMany(_))
    }

    /// Derive the query selecting the related records for `records`, all of
    /// which belong to `source`.
    ///
    /// Source keys are deduplicated before the condition is built, so a key
    /// shared by many source records contributes one membership entry. When
    /// the relation is self-referential the derived query's target side is
    /// aliased, keeping its column references distinct from the source side.
    pub fn derive_query(&self, source: &Model, records: &[Record]) -> stmt::Query {
        match self {
            Self::BelongsTo(rel) => rel.derive_query(source, records),
            Self::HasMany(rel) => rel.derive_query(source, records),
        }
    }
}

impl From<BelongsTo> for Relation {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}

impl From<HasMany> for Relation {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}

/// The distinct, non-null values of `key` across `records`, in first-seen
/// order.
fn distinct_keys(records: &[Record], key: FieldId) -> Vec<stmt::Value> {
    let mut keys = IndexSet::new();

    for record in records {
        let value = record.field(key);
        if !value.is_null() {
            keys.insert(value.clone());
        }
    }

    keys.into_iter().collect()
}

/// Build the derived query shared by both relation kinds: the target-side
/// column must be a member of the source-side key set.
fn membership_query(
    source: ModelId,
    target: ModelId,
    column: FieldId,
    keys: Vec<stmt::Value>,
) -> stmt::Query {
    let alias = (source == target).then_some(stmt::Alias::DERIVED);

    stmt::Query::filter(
        stmt::SourceModel {
            model: target,
            alias,
        },
        stmt::Expr::in_list(stmt::Expr::field_aliased(column, alias), stmt::Expr::list(keys)),
    )
}
