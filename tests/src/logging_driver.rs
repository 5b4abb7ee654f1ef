use crate::exec_log::ExecLog;

use corral::{
    async_trait,
    driver::{Driver, Response},
    stmt::Query,
    Result, Schema,
};

use std::sync::{Arc, Mutex};

/// A driver wrapper that logs every executed query for test assertions.
///
/// Queries are logged on entry, before the inner driver runs, so failed
/// attempts count as collaborator calls too.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    queries: Arc<Mutex<Vec<Query>>>,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            inner: Box::new(driver),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to the query log.
    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.queries.clone())
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, schema: &Arc<Schema>, query: &Query) -> Result<Response> {
        self.queries.lock().unwrap().push(query.clone());
        self.inner.exec(schema, query).await
    }
}
