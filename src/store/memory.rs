//! A store that keeps every table in process memory.
//!
//! Cloning a `MemoryStore` hands out another handle to the same tables, so
//! one instance can back every request of a server. Each call holds the lock
//! for its whole duration; `commit` applies its batch to a copy of the tables
//! and swaps the copy in only if every change succeeded.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{BeerQueries, Change, Entity, LinkTable, Record, Store, Table};
use crate::error::{Error, Result};
use crate::models::{Bar, BarBeer, Beer, Brewery, BreweryBeer};

#[derive(Debug, Clone, Default)]
struct Tables {
    bar: BTreeMap<i32, Bar>,
    beer: BTreeMap<i32, Beer>,
    brewery: BTreeMap<i32, Brewery>,
    bar_beer: BTreeMap<i32, BarBeer>,
    brewery_beer: BTreeMap<i32, BreweryBeer>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| Error::Store("memory store lock poisoned".into()))
    }
}

fn insert<E: Entity>(table: &mut BTreeMap<i32, E>, row: &E) -> Result<()> {
    if table.contains_key(&row.id()) {
        return Err(Error::Store(format!(
            "duplicate key value violates unique constraint on {}.id: {}",
            E::NAME,
            row.id()
        )));
    }
    table.insert(row.id(), row.clone());
    Ok(())
}

macro_rules! memory_table {
    ($model:ty, $field:ident) => {
        impl Table<$model> for MemoryStore {
            fn load_all(&mut self) -> Result<Vec<$model>> {
                Ok(self.tables()?.$field.values().cloned().collect())
            }

            fn find(&mut self, id: i32) -> Result<Option<$model>> {
                Ok(self.tables()?.$field.get(&id).cloned())
            }
        }
    };
}

memory_table!(Bar, bar);
memory_table!(Beer, beer);
memory_table!(Brewery, brewery);
memory_table!(BarBeer, bar_beer);
memory_table!(BreweryBeer, brewery_beer);

impl LinkTable<BarBeer> for MemoryStore {}

impl LinkTable<BreweryBeer> for MemoryStore {}

impl BeerQueries for MemoryStore {
    fn beers_by_abv(&mut self, min: Option<f64>, max: Option<f64>) -> Result<Vec<Beer>> {
        Ok(self
            .tables()?
            .beer
            .values()
            .filter(|beer| min.map_or(true, |min| beer.abv >= min))
            .filter(|beer| max.map_or(true, |max| beer.abv <= max))
            .cloned()
            .collect())
    }
}

impl Store for MemoryStore {
    fn commit(&mut self, changes: Vec<Change>) -> Result<usize> {
        let mut tables = self.tables()?;
        let mut next = tables.clone();
        for change in &changes {
            apply(&mut next, change)?;
        }
        *tables = next;
        Ok(changes.len())
    }
}

fn apply(tables: &mut Tables, change: &Change) -> Result<()> {
    macro_rules! replace {
        ($field:ident, $id:expr, $row:expr) => {
            if let Some(slot) = tables.$field.get_mut(&$id) {
                *slot = $row.clone();
                slot.id = $id;
            }
        };
    }

    match change {
        Change::Insert(record) => match record {
            Record::Bar(row) => insert(&mut tables.bar, row),
            Record::Beer(row) => insert(&mut tables.beer, row),
            Record::Brewery(row) => insert(&mut tables.brewery, row),
            Record::BarBeer(row) => insert(&mut tables.bar_beer, row),
            Record::BreweryBeer(row) => insert(&mut tables.brewery_beer, row),
        },
        Change::Update(id, record) => {
            match record {
                Record::Bar(row) => replace!(bar, *id, row),
                Record::Beer(row) => replace!(beer, *id, row),
                Record::Brewery(row) => replace!(brewery, *id, row),
                Record::BarBeer(row) => replace!(bar_beer, *id, row),
                Record::BreweryBeer(row) => replace!(brewery_beer, *id, row),
            }
            Ok(())
        }
    }
}
