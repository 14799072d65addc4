use actix_web::web;

use std::marker::Send;

use super::error::Result;
use super::store::postgres::Pool;
use super::store::{MemoryStore, PgStore, Store};
use super::unit_of_work::UnitOfWork;

/// Something that can hand out a fresh store handle for each request.
pub trait Backend: Clone + Send + Sync + 'static {
    type Store: Store;

    fn open(&self) -> Result<Self::Store>;
}

impl Backend for Pool {
    type Store = PgStore;

    fn open(&self) -> Result<PgStore> {
        Ok(PgStore::new(self.get()?))
    }
}

impl Backend for MemoryStore {
    type Store = MemoryStore;

    fn open(&self) -> Result<MemoryStore> {
        Ok(self.clone())
    }
}

/// Run `op` against a new unit of work on the blocking thread pool.
///
/// The store handle is opened on the worker thread and dropped with the unit
/// of work once `op` returns.
pub async fn execute<B, F, T>(backend: &B, op: F) -> Result<T>
where
    B: Backend,
    F: FnOnce(&UnitOfWork<B::Store>) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let backend = backend.clone();

    web::block(move || {
        let uow = UnitOfWork::new(backend.open()?);
        op(&uow)
    })
    .await?
}
