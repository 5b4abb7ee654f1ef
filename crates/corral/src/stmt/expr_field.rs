use super::*;

/// A reference to a model field, optionally qualified by a source alias.
///
/// The alias distinguishes the two sides of a self-referential relation: the
/// source records are the implicit, unaliased side, and a derived query's
/// target side is qualified so the same model's columns cannot collide.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub field: FieldId,
    pub alias: Option<Alias>,
}

/// Identifies one occurrence of a source within a query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Alias(pub u32);

impl Alias {
    /// Alias assigned to the target side of a self-referential derived query.
    pub const DERIVED: Alias = Alias(1);
}

impl From<FieldId> for ExprField {
    fn from(field: FieldId) -> Self {
        Self { field, alias: None }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
