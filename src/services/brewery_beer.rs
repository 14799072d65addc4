use super::refuse;
use crate::dto::{BreweryBeerDto, BreweryBeersDto};
use crate::error::Result;
use crate::models::BreweryBeer;
use crate::store::Store;
use crate::unit_of_work::UnitOfWork;

pub struct BreweryBeerService<'a, S> {
    uow: &'a UnitOfWork<S>,
}

impl<'a, S: Store> BreweryBeerService<'a, S> {
    pub fn new(uow: &'a UnitOfWork<S>) -> BreweryBeerService<'a, S> {
        BreweryBeerService { uow }
    }

    /// Record that a brewery brews a beer.
    pub fn add(&self, dto: BreweryBeerDto) -> Result<BreweryBeerDto> {
        if self.uow.brewery_beers().exists(dto.id)? {
            return Err(refuse(format!(
                "BreweryBeer id is already present : {}",
                dto.id
            )));
        }
        if !self.uow.breweries().exists(|b| b.id == dto.brewery_id)? {
            return Err(refuse(format!(
                "Brewery is not present for this BreweryId : {}",
                dto.brewery_id
            )));
        }
        if !self.uow.beers().exists(|beer| beer.id == dto.beer_id)? {
            return Err(refuse(format!(
                "Beer is not present for this BeerId : {}",
                dto.beer_id
            )));
        }
        let added = self.uow.brewery_beers().add(BreweryBeer::from(dto))?;
        self.uow.save()?;
        Ok(added.into())
    }

    pub fn get_all(&self) -> Result<Vec<BreweryBeersDto>> {
        Ok(self
            .uow
            .brewery_beers()
            .get_all()?
            .into_iter()
            .map(BreweryBeersDto::from)
            .collect())
    }

    pub fn get_by_id(&self, brewery_id: i32) -> Result<Vec<BreweryBeersDto>> {
        Ok(self
            .uow
            .brewery_beers()
            .get_by_id(brewery_id)?
            .into_iter()
            .map(BreweryBeersDto::from)
            .collect())
    }
}
