use diesel::prelude::*;

use super::schema::*;
use super::store::{Entity, Link, Record};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = bar)]
#[diesel(treat_none_as_null = true)]
pub struct Bar {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = beer)]
pub struct Beer {
    pub id: i32,
    pub name: String,
    /// Percentage alcohol by volume.
    pub abv: f64,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = brewery)]
pub struct Brewery {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = bar_beer)]
pub struct BarBeer {
    pub id: i32,
    pub bar_id: i32,
    pub beer_id: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = brewery_beer)]
pub struct BreweryBeer {
    pub id: i32,
    pub brewery_id: i32,
    pub beer_id: i32,
}

macro_rules! entity {
    ($model:ident, $name:expr) => {
        impl Entity for $model {
            const NAME: &'static str = $name;

            fn id(&self) -> i32 {
                self.id
            }

            fn into_record(self) -> Record {
                Record::$model(self)
            }
        }
    };
}

entity!(Bar, "bar");
entity!(Beer, "beer");
entity!(Brewery, "brewery");
entity!(BarBeer, "bar_beer");
entity!(BreweryBeer, "brewery_beer");

impl Link for BarBeer {
    type Parent = Bar;

    fn parent_id(&self) -> i32 {
        self.bar_id
    }

    fn beer_id(&self) -> i32 {
        self.beer_id
    }
}

impl Link for BreweryBeer {
    type Parent = Brewery;

    fn parent_id(&self) -> i32 {
        self.brewery_id
    }

    fn beer_id(&self) -> i32 {
        self.beer_id
    }
}
