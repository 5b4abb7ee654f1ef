use super::*;

/// A complete, self-sufficient description of a data request.
///
/// Two queries with identical attributes are semantically equivalent and
/// produce identical result sets against the same data state. Once a query is
/// handed to a collection it is never mutated; [`Query::refine`] layers
/// additional conditions by returning a new query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The SELECT body: source model and filter
    pub body: Select,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT and OFFSET
    pub limit: Option<Limit>,

    /// Name of the repository that serves this query. `None` selects the
    /// default repository.
    pub repository: Option<String>,
}

impl Query {
    pub fn filter(source: impl Into<SourceModel>, filter: impl Into<Expr>) -> Self {
        Self {
            body: Select::new(source, filter),
            order_by: None,
            limit: None,
            repository: None,
        }
    }

    pub fn model_id(&self) -> ModelId {
        self.body.source.model
    }

    pub fn source(&self) -> &SourceModel {
        &self.body.source
    }

    pub fn filter_expr(&self) -> &Expr {
        &self.body.filter
    }

    /// Returns a new query layering an additional condition on top of this
    /// one. `self` is left untouched.
    pub fn refine(&self, expr: impl Into<Expr>) -> Self {
        let mut refined = self.clone();
        refined.body.filter = Expr::and(refined.body.filter, expr);
        refined
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit.get_or_insert_with(Limit::default).count = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.limit.get_or_insert_with(Limit::default).offset = Some(offset);
        self
    }

    pub fn repository(mut self, name: impl Into<String>) -> Self {
        self.repository = Some(name.into());
        self
    }

    /// True if the query's filter can never match a row.
    pub fn never_matches(&self) -> bool {
        self.body.filter.never_matches()
    }
}
