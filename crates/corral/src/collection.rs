mod dispatch;
pub use dispatch::Dispatch;

use crate::{
    schema::Model,
    stmt::{self, ValueRecord},
    Record, Repository, Result,
};

use std::sync::{Arc, Mutex, OnceLock};

/// An ordered, lazily-populated sequence of records bound to a query.
///
/// The bound query does not execute until a kicker — any operation that
/// enumerates, counts, indexes, or compares members — forces materialization.
/// Rows may be seeded at construction to satisfy the first kicker without an
/// adapter round trip. Load-state moves `unloaded → loaded` exactly once and
/// never reverses; a failed load leaves the collection unloaded so the caller
/// may retry.
#[derive(Debug)]
pub struct Collection {
    repository: Arc<Repository>,

    query: stmt::Query,

    /// Raw rows seeded before the first kicker. Consumed by the load that
    /// succeeds; restored if materializing them fails.
    pending: Mutex<Vec<ValueRecord>>,

    /// Serializes the unloaded→loaded transition. Kickers double-check
    /// `records` after acquiring it, so the query executes at most once.
    load_guard: tokio::sync::Mutex<()>,

    /// Set exactly once, by the kicker that completes the load. Reads after
    /// that take no lock.
    records: OnceLock<Vec<Record>>,
}

/// Handle passed to the factory's seed callback.
pub struct Preload<'a> {
    rows: &'a mut Vec<ValueRecord>,
}

impl Preload<'_> {
    /// Seed one raw row. The row is not materialized until a kicker fires.
    pub fn row(&mut self, row: impl Into<ValueRecord>) {
        self.rows.push(row.into());
    }
}

impl Collection {
    /// An unloaded collection bound to `query`.
    pub fn new(repository: Arc<Repository>, query: stmt::Query) -> Self {
        Self {
            repository,
            query,
            pending: Mutex::new(vec![]),
            load_guard: tokio::sync::Mutex::new(()),
            records: OnceLock::new(),
        }
    }

    /// An unloaded collection seeded with rows by `preload`.
    ///
    /// The callback runs immediately, before the collection is returned, but
    /// seeding is not loading: the collection reports unloaded until a kicker
    /// fires, and the factory performs no I/O.
    pub fn with_rows(
        repository: Arc<Repository>,
        query: stmt::Query,
        preload: impl FnOnce(&mut Preload<'_>),
    ) -> Self {
        let mut rows = vec![];
        preload(&mut Preload { rows: &mut rows });

        let collection = Self::new(repository, query);
        *collection.pending.lock().unwrap() = rows;
        collection
    }

    pub fn query(&self) -> &stmt::Query {
        &self.query
    }

    pub fn repository(&self) -> &Arc<Repository> {
        &self.repository
    }

    /// Pure inspection of load-state; never triggers loading and performs no
    /// collaborator calls.
    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }

    /// The materialized members, loading them if needed. Kicker.
    pub async fn entries(&self) -> Result<&[Record]> {
        Ok(self.load().await?.as_slice())
    }

    /// The number of members. Kicker.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }

    /// Whether the collection has no members. Kicker.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.load().await?.is_empty())
    }

    /// The member at `index`, if any. Kicker.
    pub async fn get(&self, index: usize) -> Result<Option<&Record>> {
        Ok(self.load().await?.get(index))
    }

    /// The first member, if any. Kicker.
    pub async fn first(&self) -> Result<Option<&Record>> {
        self.get(0).await
    }

    /// The members as an owned vector. Kicker.
    pub async fn to_vec(&self) -> Result<Vec<Record>> {
        Ok(self.load().await?.clone())
    }

    /// Element-wise, ordered comparison of two collections' members. Kicker
    /// on both sides.
    pub async fn eq(&self, other: &Collection) -> Result<bool> {
        let lhs = self.entries().await?;
        let rhs = other.entries().await?;
        Ok(lhs == rhs)
    }

    pub(crate) fn model(&self) -> &Model {
        self.repository.schema().model(self.query.model_id())
    }

    async fn load(&self) -> Result<&Vec<Record>> {
        if let Some(records) = self.records.get() {
            return Ok(records);
        }

        let _guard = self.load_guard.lock().await;

        if let Some(records) = self.records.get() {
            return Ok(records);
        }

        let model = self.model();
        let pending = std::mem::take(&mut *self.pending.lock().unwrap());

        let records = if !pending.is_empty() {
            match materialize(model, pending.iter().cloned()) {
                Ok(records) => records,
                Err(err) => {
                    // Load did not happen; put the rows back for a retry.
                    *self.pending.lock().unwrap() = pending;
                    return Err(err);
                }
            }
        } else if self.query.never_matches() {
            vec![]
        } else {
            let rows = self.repository.exec(&self.query).await?;
            materialize(model, rows.into_iter())?
        };

        Ok(self.records.get_or_init(|| records))
    }
}

fn materialize(
    model: &Model,
    rows: impl Iterator<Item = ValueRecord>,
) -> Result<Vec<Record>> {
    rows.map(|row| Record::load(model, row)).collect()
}
