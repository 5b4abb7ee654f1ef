use crate::{async_trait, stmt, Schema};

use std::{fmt::Debug, sync::Arc};

/// The storage-adapter contract.
///
/// A driver executes a query against its data source and returns the matching
/// raw rows, in order. Connectivity and query failures surface as adapter
/// errors ([`crate::Error::adapter`]); retries, cancellation, and timeouts
/// are the driver's responsibility, not the collection's.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a query, returning the ordered sequence of matching raw rows.
    async fn exec(&self, schema: &Arc<Schema>, query: &stmt::Query) -> crate::Result<Response>;
}

#[derive(Debug)]
pub struct Response {
    pub rows: Vec<stmt::ValueRecord>,
}

impl Response {
    pub fn rows(rows: Vec<stmt::ValueRecord>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: vec![] }
    }
}
