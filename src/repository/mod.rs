use std::marker::PhantomData;
use std::rc::Rc;

use super::error::Result;
use super::models::Beer;
use super::store::{BeerQueries, Change, Entity, Session, Table};

pub mod join;

pub use self::join::{Aggregate, BarBeerRepository, BreweryBeerRepository, JoinRepository};

/// CRUD access to the table holding `E`.
///
/// Writes are only staged on the shared session; nothing is persisted until
/// the owning unit of work is saved. Reads always go to the store.
pub struct Repository<E, S> {
    session: Rc<Session<S>>,
    entity: PhantomData<E>,
}

impl<E, S> Repository<E, S>
where
    E: Entity,
    S: Table<E>,
{
    pub fn new(session: Rc<Session<S>>) -> Repository<E, S> {
        Repository {
            session,
            entity: PhantomData,
        }
    }

    pub fn add(&self, entity: E) -> Result<E> {
        debug!("staging insert into {} for id {}", E::NAME, entity.id());
        self.session.stage(Change::Insert(entity.clone().into_record()));
        Ok(entity)
    }

    /// Stage a whole-row replacement of the row keyed by `id`.
    ///
    /// Does not check that the row exists.
    pub fn update(&self, id: i32, entity: E) -> Result<bool> {
        debug!("staging update of {} id {}", E::NAME, id);
        self.session.stage(Change::Update(id, entity.into_record()));
        Ok(true)
    }

    pub fn get_all(&self) -> Result<Vec<E>> {
        self.session.read(|store| store.load_all())
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<E>> {
        self.session.read(|store| store.find(id))
    }

    pub fn exists<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&E) -> bool,
    {
        Ok(self.get_all()?.iter().any(predicate))
    }
}

impl<S> Repository<Beer, S>
where
    S: Table<Beer> + BeerQueries,
{
    /// Beers with `min <= abv <= max`; either bound may be left open.
    pub fn by_alcohol(&self, min: Option<f64>, max: Option<f64>) -> Result<Vec<Beer>> {
        self.session.read(|store| store.beers_by_abv(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bar;
    use crate::store::{MemoryStore, Store};

    fn session() -> Rc<Session<MemoryStore>> {
        Rc::new(Session::new(MemoryStore::new()))
    }

    fn rose() -> Bar {
        Bar {
            id: 1,
            name: "Rose".into(),
            address: Some("1 Main Street".into()),
        }
    }

    #[test]
    fn add_is_only_visible_after_commit() {
        let session = session();
        let bars: Repository<Bar, _> = Repository::new(Rc::clone(&session));

        assert_eq!(bars.add(rose()).unwrap(), rose());
        assert_eq!(bars.get_by_id(1).unwrap(), None);
        assert_eq!(session.pending(), 1);

        session.commit().unwrap();
        assert_eq!(bars.get_by_id(1).unwrap(), Some(rose()));
        assert_eq!(session.pending(), 0);
    }

    #[test]
    fn update_replaces_the_whole_row() {
        let session = session();
        let bars: Repository<Bar, _> = Repository::new(Rc::clone(&session));
        bars.add(rose()).unwrap();
        session.commit().unwrap();

        let moved = Bar {
            id: 1,
            name: "Rose & Crown".into(),
            address: None,
        };
        assert!(bars.update(1, moved.clone()).unwrap());
        session.commit().unwrap();

        assert_eq!(bars.get_all().unwrap(), vec![moved]);
    }

    #[test]
    fn update_of_a_missing_row_still_stages() {
        let session = session();
        let bars: Repository<Bar, _> = Repository::new(Rc::clone(&session));
        assert!(bars.update(42, rose()).unwrap());
        assert_eq!(session.pending(), 1);
        session.commit().unwrap();
        assert!(bars.get_all().unwrap().is_empty());
    }

    #[test]
    fn exists_evaluates_the_predicate_over_the_table() {
        let session = session();
        let bars: Repository<Bar, _> = Repository::new(Rc::clone(&session));
        bars.add(rose()).unwrap();
        session.commit().unwrap();

        assert!(bars.exists(|bar| bar.id == 1).unwrap());
        assert!(bars.exists(|bar| bar.name.starts_with("Ro")).unwrap());
        assert!(!bars.exists(|bar| bar.id == 2).unwrap());
    }

    #[test]
    fn get_all_is_stable_without_mutation() {
        let session = session();
        let bars: Repository<Bar, _> = Repository::new(Rc::clone(&session));
        bars.add(rose()).unwrap();
        bars.add(Bar {
            id: 2,
            name: "Anchor".into(),
            address: None,
        })
        .unwrap();
        session.commit().unwrap();

        assert_eq!(bars.get_all().unwrap(), bars.get_all().unwrap());
    }

    #[test]
    fn beers_filtered_by_alcohol_bounds() {
        let mut store = MemoryStore::new();
        let beers = vec![(1, 3.0), (2, 4.5), (3, 6.0)]
            .into_iter()
            .map(|(id, abv)| {
                Change::Insert(
                    Beer {
                        id,
                        name: format!("Beer {}", id),
                        abv,
                    }
                    .into_record(),
                )
            })
            .collect();
        store.commit(beers).unwrap();

        let repo: Repository<Beer, _> = Repository::new(Rc::new(Session::new(store)));
        let abv = |beers: Vec<Beer>| beers.into_iter().map(|b| b.abv).collect::<Vec<_>>();

        assert_eq!(abv(repo.by_alcohol(Some(4.0), Some(5.5)).unwrap()), vec![4.5]);
        assert_eq!(abv(repo.by_alcohol(Some(4.5), None).unwrap()), vec![4.5, 6.0]);
        assert_eq!(abv(repo.by_alcohol(None, Some(4.5)).unwrap()), vec![3.0, 4.5]);
        assert_eq!(abv(repo.by_alcohol(None, None).unwrap()).len(), 3);
    }
}
