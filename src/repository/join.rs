//! Parent-with-beers views over the two link tables.

use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::Result;
use crate::models::{BarBeer, Beer, BreweryBeer};
use crate::store::{Change, Entity, Link, LinkTable, Session, Table};

/// A parent row together with every beer linked to it, in beer id order.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<P> {
    pub parent: P,
    pub beers: Vec<Beer>,
}

pub struct JoinRepository<L, S> {
    session: Rc<Session<S>>,
    link: PhantomData<L>,
}

pub type BarBeerRepository<S> = JoinRepository<BarBeer, S>;
pub type BreweryBeerRepository<S> = JoinRepository<BreweryBeer, S>;

impl<L, S> JoinRepository<L, S>
where
    L: Link,
    S: LinkTable<L> + Table<L::Parent> + Table<Beer>,
{
    pub fn new(session: Rc<Session<S>>) -> JoinRepository<L, S> {
        JoinRepository {
            session,
            link: PhantomData,
        }
    }

    /// Every parent with its beers. Parents without links are kept, with an
    /// empty beer list.
    pub fn get_all(&self) -> Result<Vec<Aggregate<L::Parent>>> {
        self.session.read(|store| {
            let parents = Table::<L::Parent>::load_all(store)?;
            if parents.is_empty() {
                return Ok(Vec::new());
            }

            let mut linked: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
            for link in Table::<L>::load_all(store)? {
                linked
                    .entry(link.parent_id())
                    .or_default()
                    .insert(link.beer_id());
            }

            let wanted: BTreeSet<i32> = linked.values().flatten().copied().collect();
            let beers = load_beers(store, &wanted)?;

            Ok(parents
                .into_iter()
                .map(|parent| {
                    let ids = linked.get(&parent.id());
                    assemble(parent, ids, &beers)
                })
                .collect())
        })
    }

    /// The parent keyed by `id` with its beers: one element, or none if
    /// there is no such parent.
    pub fn get_by_id(&self, id: i32) -> Result<Vec<Aggregate<L::Parent>>> {
        self.session.read(|store| {
            let parent = match Table::<L::Parent>::find(store, id)? {
                Some(parent) => parent,
                None => return Ok(Vec::new()),
            };

            let ids: BTreeSet<i32> = store
                .links_of(id)?
                .iter()
                .map(|link| link.beer_id())
                .collect();
            let beers = load_beers(store, &ids)?;

            Ok(vec![assemble(parent, Some(&ids), &beers)])
        })
    }

    pub fn add(&self, link: L) -> Result<L> {
        debug!("staging insert into {} for id {}", L::NAME, link.id());
        self.session.stage(Change::Insert(link.clone().into_record()));
        Ok(link)
    }

    /// Whether a row of this link table has the given id.
    pub fn exists(&self, id: i32) -> Result<bool> {
        self.session
            .read(|store| Ok(Table::<L>::find(store, id)?.is_some()))
    }
}

fn load_beers<S: Table<Beer>>(store: &mut S, ids: &BTreeSet<i32>) -> Result<BTreeMap<i32, Beer>> {
    if ids.is_empty() {
        return Ok(BTreeMap::new());
    }
    let ids: Vec<i32> = ids.iter().copied().collect();
    Ok(store
        .find_many(&ids)?
        .into_iter()
        .map(|beer| (beer.id, beer))
        .collect())
}

fn assemble<P>(parent: P, ids: Option<&BTreeSet<i32>>, beers: &BTreeMap<i32, Beer>) -> Aggregate<P> {
    let beers = ids
        .into_iter()
        .flatten()
        .filter_map(|id| beers.get(id).cloned())
        .collect();
    Aggregate { parent, beers }
}
