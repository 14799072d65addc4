use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::error::Result;
use super::models::{Bar, Beer, Brewery};
use super::repository::{BarBeerRepository, BreweryBeerRepository, JoinRepository, Repository};
use super::store::{Session, Store};

/// Request-scoped access to every repository over a single store handle.
///
/// Each repository is built on first use and reused for the lifetime of the
/// unit of work. `save` commits whatever any of them staged.
pub struct UnitOfWork<S> {
    session: Rc<Session<S>>,
    bars: OnceCell<Repository<Bar, S>>,
    beers: OnceCell<Repository<Beer, S>>,
    breweries: OnceCell<Repository<Brewery, S>>,
    bar_beers: OnceCell<BarBeerRepository<S>>,
    brewery_beers: OnceCell<BreweryBeerRepository<S>>,
}

impl<S: Store> UnitOfWork<S> {
    pub fn new(store: S) -> UnitOfWork<S> {
        UnitOfWork {
            session: Rc::new(Session::new(store)),
            bars: OnceCell::new(),
            beers: OnceCell::new(),
            breweries: OnceCell::new(),
            bar_beers: OnceCell::new(),
            brewery_beers: OnceCell::new(),
        }
    }

    pub fn bars(&self) -> &Repository<Bar, S> {
        self.bars
            .get_or_init(|| Repository::new(Rc::clone(&self.session)))
    }

    pub fn beers(&self) -> &Repository<Beer, S> {
        self.beers
            .get_or_init(|| Repository::new(Rc::clone(&self.session)))
    }

    pub fn breweries(&self) -> &Repository<Brewery, S> {
        self.breweries
            .get_or_init(|| Repository::new(Rc::clone(&self.session)))
    }

    pub fn bar_beers(&self) -> &BarBeerRepository<S> {
        self.bar_beers
            .get_or_init(|| JoinRepository::new(Rc::clone(&self.session)))
    }

    pub fn brewery_beers(&self) -> &BreweryBeerRepository<S> {
        self.brewery_beers
            .get_or_init(|| JoinRepository::new(Rc::clone(&self.session)))
    }

    /// Number of changes staged and not yet saved.
    pub fn pending(&self) -> usize {
        self.session.pending()
    }

    pub fn save(&self) -> Result<usize> {
        self.session.commit()
    }
}
