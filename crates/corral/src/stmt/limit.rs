/// LIMIT/OFFSET applied to a query's result sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Limit {
    pub count: Option<u64>,
    pub offset: Option<u64>,
}
