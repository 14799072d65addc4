use diesel::prelude::*;
use diesel::r2d2;

use super::{BeerQueries, Change, LinkTable, Record, Store, Table};
use crate::error::{Error, Result};
use crate::models::{Bar, BarBeer, Beer, Brewery, BreweryBeer};
use crate::schema::{bar, bar_beer, beer, brewery, brewery_beer};

pub type Pool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;
pub type PooledConnection = r2d2::PooledConnection<r2d2::ConnectionManager<PgConnection>>;

/// Create a connection pool to the database.
pub fn connect(database_url: &str, max_size: u32) -> Result<Pool> {
    let manager = r2d2::ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// A store backed by one pooled PostgreSQL connection.
pub struct PgStore(PooledConnection);

impl PgStore {
    pub fn new(conn: PooledConnection) -> PgStore {
        PgStore(conn)
    }

    fn conn(&mut self) -> &mut PgConnection {
        &mut self.0
    }
}

macro_rules! pg_table {
    ($model:ty, $table:ident) => {
        impl Table<$model> for PgStore {
            fn load_all(&mut self) -> Result<Vec<$model>> {
                Ok($table::table
                    .order($table::id.asc())
                    .select(<$model>::as_select())
                    .load(self.conn())?)
            }

            fn find(&mut self, id: i32) -> Result<Option<$model>> {
                Ok($table::table
                    .find(id)
                    .select(<$model>::as_select())
                    .first(self.conn())
                    .optional()?)
            }

            fn find_many(&mut self, ids: &[i32]) -> Result<Vec<$model>> {
                Ok($table::table
                    .filter($table::id.eq_any(ids.to_vec()))
                    .order($table::id.asc())
                    .select(<$model>::as_select())
                    .load(self.conn())?)
            }
        }
    };
}

pg_table!(Bar, bar);
pg_table!(Beer, beer);
pg_table!(Brewery, brewery);
pg_table!(BarBeer, bar_beer);
pg_table!(BreweryBeer, brewery_beer);

impl LinkTable<BarBeer> for PgStore {
    fn links_of(&mut self, parent_id: i32) -> Result<Vec<BarBeer>> {
        Ok(bar_beer::table
            .filter(bar_beer::bar_id.eq(parent_id))
            .order(bar_beer::id.asc())
            .select(BarBeer::as_select())
            .load(self.conn())?)
    }
}

impl LinkTable<BreweryBeer> for PgStore {
    fn links_of(&mut self, parent_id: i32) -> Result<Vec<BreweryBeer>> {
        Ok(brewery_beer::table
            .filter(brewery_beer::brewery_id.eq(parent_id))
            .order(brewery_beer::id.asc())
            .select(BreweryBeer::as_select())
            .load(self.conn())?)
    }
}

impl BeerQueries for PgStore {
    fn beers_by_abv(&mut self, min: Option<f64>, max: Option<f64>) -> Result<Vec<Beer>> {
        let mut query = beer::table.order(beer::id.asc()).into_boxed();
        if let Some(min) = min {
            query = query.filter(beer::abv.ge(min));
        }
        if let Some(max) = max {
            query = query.filter(beer::abv.le(max));
        }
        Ok(query.load::<Beer>(self.conn())?)
    }
}

impl Store for PgStore {
    fn commit(&mut self, changes: Vec<Change>) -> Result<usize> {
        self.conn().transaction::<_, Error, _>(|conn| {
            for change in &changes {
                apply(conn, change)?;
            }
            Ok(changes.len())
        })
    }
}

fn apply(conn: &mut PgConnection, change: &Change) -> QueryResult<usize> {
    match change {
        Change::Insert(record) => match record {
            Record::Bar(row) => diesel::insert_into(bar::table).values(row).execute(conn),
            Record::Beer(row) => diesel::insert_into(beer::table).values(row).execute(conn),
            Record::Brewery(row) => diesel::insert_into(brewery::table).values(row).execute(conn),
            Record::BarBeer(row) => diesel::insert_into(bar_beer::table).values(row).execute(conn),
            Record::BreweryBeer(row) => {
                diesel::insert_into(brewery_beer::table).values(row).execute(conn)
            }
        },
        Change::Update(id, record) => match record {
            Record::Bar(row) => diesel::update(bar::table.find(*id)).set(row).execute(conn),
            Record::Beer(row) => diesel::update(beer::table.find(*id)).set(row).execute(conn),
            Record::Brewery(row) => diesel::update(brewery::table.find(*id)).set(row).execute(conn),
            Record::BarBeer(row) => diesel::update(bar_beer::table.find(*id)).set(row).execute(conn),
            Record::BreweryBeer(row) => {
                diesel::update(brewery_beer::table.find(*id)).set(row).execute(conn)
            }
        },
    }
}
