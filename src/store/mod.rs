//! The narrow interface between repositories and the physical database.
//!
//! Reads go straight to a [`Store`]; writes are recorded as [`Change`]s on a
//! [`Session`] and only reach the store when the session is committed, all at
//! once, inside a single store transaction.

use std::cell::RefCell;
use std::fmt;

use super::error::Result;
use super::models::{Bar, BarBeer, Beer, Brewery, BreweryBeer};

pub mod memory;
pub mod postgres;

pub use self::memory::MemoryStore;
pub use self::postgres::PgStore;

/// A row type keyed by an integer primary key.
pub trait Entity: Clone + fmt::Debug + 'static {
    /// Name of the backing table, used in logs.
    const NAME: &'static str;

    fn id(&self) -> i32;

    fn into_record(self) -> Record;
}

/// A row of a link table associating a parent entity with a beer.
pub trait Link: Entity {
    type Parent: Entity;

    fn parent_id(&self) -> i32;

    fn beer_id(&self) -> i32;
}

/// Any row of any table, as carried by a staged change.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Bar(Bar),
    Beer(Beer),
    Brewery(Brewery),
    BarBeer(BarBeer),
    BreweryBeer(BreweryBeer),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Insert(Record),
    /// Replace every column but the key of the row keyed by the id.
    Update(i32, Record),
}

/// Read access to the table holding `E`. Rows come back in primary key order.
pub trait Table<E: Entity> {
    fn load_all(&mut self) -> Result<Vec<E>>;

    fn find(&mut self, id: i32) -> Result<Option<E>>;

    fn find_many(&mut self, ids: &[i32]) -> Result<Vec<E>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|row| ids.contains(&row.id()))
            .collect())
    }
}

pub trait LinkTable<L: Link>: Table<L> {
    /// Every link row pointing at the given parent.
    fn links_of(&mut self, parent_id: i32) -> Result<Vec<L>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|link| link.parent_id() == parent_id)
            .collect())
    }
}

pub trait BeerQueries {
    /// Beers whose abv lies within the inclusive bounds; a missing bound is open.
    fn beers_by_abv(&mut self, min: Option<f64>, max: Option<f64>) -> Result<Vec<Beer>>;
}

pub trait Store:
    Table<Bar>
    + Table<Beer>
    + Table<Brewery>
    + LinkTable<BarBeer>
    + LinkTable<BreweryBeer>
    + BeerQueries
{
    /// Apply every change or none of them. Returns the number applied.
    fn commit(&mut self, changes: Vec<Change>) -> Result<usize>;
}

/// One store handle plus the changes staged against it.
pub struct Session<S> {
    store: RefCell<S>,
    pending: RefCell<Vec<Change>>,
}

impl<S> Session<S> {
    pub fn new(store: S) -> Session<S> {
        Session {
            store: RefCell::new(store),
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut S) -> Result<T>,
    {
        f(&mut *self.store.borrow_mut())
    }

    pub fn stage(&self, change: Change) {
        self.pending.borrow_mut().push(change);
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl<S: Store> Session<S> {
    /// Flush staged changes. The staged list is emptied whether or not the
    /// store accepts it.
    pub fn commit(&self) -> Result<usize> {
        let changes = self.pending.replace(Vec::new());
        if changes.is_empty() {
            return Ok(0);
        }
        debug!("committing {} staged change(s)", changes.len());
        self.store.borrow_mut().commit(changes)
    }
}
