use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Where the data is selected from
    pub source: SourceModel,

    /// Filter applied to the source
    pub filter: Expr,
}

impl Select {
    pub fn new(source: impl Into<SourceModel>, filter: impl Into<Expr>) -> Self {
        Self {
            source: source.into(),
            filter: filter.into(),
        }
    }
}
