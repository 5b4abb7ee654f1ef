use crate::{driver::Driver, stmt, Collection, Error, Result, Schema};

use indexmap::IndexMap;
use std::sync::Arc;

/// Name a query's repository defaults to when it does not specify one.
pub const DEFAULT: &str = "default";

/// Owns the schema and the storage adapters, and resolves which adapter
/// serves a given query.
#[derive(Debug)]
pub struct Repository {
    schema: Arc<Schema>,
    drivers: IndexMap<String, Arc<dyn Driver>>,
}

#[derive(Debug, Default)]
pub struct Builder {
    schema: Option<Schema>,
    drivers: IndexMap<String, Arc<dyn Driver>>,
}

impl Repository {
    /// A repository serving `schema` through a single default driver.
    pub fn new(schema: Schema, driver: impl Driver) -> Arc<Self> {
        Self::builder()
            .schema(schema)
            .driver(DEFAULT, driver)
            .build()
            .expect("default repository construction cannot fail")
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Resolve the driver serving `query`.
    pub fn driver(&self, query: &stmt::Query) -> Result<&Arc<dyn Driver>> {
        let name = query.repository.as_deref().unwrap_or(DEFAULT);
        self.drivers
            .get(name)
            .ok_or_else(|| crate::err!("unknown repository `{name}`"))
    }

    pub(crate) async fn exec(&self, query: &stmt::Query) -> Result<Vec<stmt::ValueRecord>> {
        let response = self.driver(query)?.exec(&self.schema, query).await?;
        Ok(response.rows)
    }

    /// The collection factory: an unloaded collection bound to `query`.
    pub fn all(self: &Arc<Self>, query: stmt::Query) -> Collection {
        Collection::new(self.clone(), query)
    }
}

impl Builder {
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Register a named driver.
    pub fn driver(mut self, name: impl Into<String>, driver: impl Driver) -> Self {
        self.drivers.insert(name.into(), Arc::new(driver));
        self
    }

    pub fn build(self) -> Result<Arc<Repository>> {
        let Some(schema) = self.schema else {
            return Err(Error::invalid_schema("repository has no schema"));
        };
        if self.drivers.is_empty() {
            return Err(Error::invalid_schema("repository has no drivers"));
        }

        Ok(Arc::new(Repository {
            schema: Arc::new(schema),
            drivers: self.drivers,
        }))
    }
}
