use super::refuse;
use crate::dto::{BarBeerDto, BarBeersDto};
use crate::error::Result;
use crate::models::BarBeer;
use crate::store::Store;
use crate::unit_of_work::UnitOfWork;

pub struct BarBeerService<'a, S> {
    uow: &'a UnitOfWork<S>,
}

impl<'a, S: Store> BarBeerService<'a, S> {
    pub fn new(uow: &'a UnitOfWork<S>) -> BarBeerService<'a, S> {
        BarBeerService { uow }
    }

    /// Link a beer to a bar.
    pub fn add(&self, dto: BarBeerDto) -> Result<BarBeerDto> {
        if self.uow.bar_beers().exists(dto.id)? {
            return Err(refuse(format!("BarBeer id is already present : {}", dto.id)));
        }
        if !self.uow.bars().exists(|bar| bar.id == dto.bar_id)? {
            return Err(refuse(format!(
                "Bar is not present for this BarId : {}",
                dto.bar_id
            )));
        }
        if !self.uow.beers().exists(|beer| beer.id == dto.beer_id)? {
            return Err(refuse(format!(
                "Beer is not present for this BeerId : {}",
                dto.beer_id
            )));
        }
        let added = self.uow.bar_beers().add(BarBeer::from(dto))?;
        self.uow.save()?;
        Ok(added.into())
    }

    pub fn get_all(&self) -> Result<Vec<BarBeersDto>> {
        Ok(self
            .uow
            .bar_beers()
            .get_all()?
            .into_iter()
            .map(BarBeersDto::from)
            .collect())
    }

    pub fn get_by_id(&self, bar_id: i32) -> Result<Vec<BarBeersDto>> {
        Ok(self
            .uow
            .bar_beers()
            .get_by_id(bar_id)?
            .into_iter()
            .map(BarBeersDto::from)
            .collect())
    }
}
