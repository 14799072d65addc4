use super::refuse;
use crate::dto::BeerDto;
use crate::error::Result;
use crate::models::Beer;
use crate::store::Store;
use crate::unit_of_work::UnitOfWork;

pub struct BeerService<'a, S> {
    uow: &'a UnitOfWork<S>,
}

impl<'a, S: Store> BeerService<'a, S> {
    pub fn new(uow: &'a UnitOfWork<S>) -> BeerService<'a, S> {
        BeerService { uow }
    }

    pub fn add(&self, dto: BeerDto) -> Result<BeerDto> {
        dto.validate()?;
        if self.uow.beers().exists(|beer| beer.id == dto.beer_id)? {
            return Err(refuse(format!(
                "Beer is already present for given beer id : {}.",
                dto.beer_id
            )));
        }
        let added = self.uow.beers().add(Beer::from(dto))?;
        self.uow.save()?;
        Ok(added.into())
    }

    pub fn update(&self, id: i32, dto: BeerDto) -> Result<()> {
        dto.validate()?;
        if !self.uow.beers().exists(|beer| beer.id == id)? {
            return Err(refuse(format!(
                "Beer is not present for given beer id : {}.",
                id
            )));
        }
        self.uow.beers().update(id, Beer::from(dto))?;
        self.uow.save()?;
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<BeerDto>> {
        Ok(self
            .uow
            .beers()
            .get_all()?
            .into_iter()
            .map(BeerDto::from)
            .collect())
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<BeerDto>> {
        Ok(self.uow.beers().get_by_id(id)?.map(BeerDto::from))
    }

    /// Beers with `gt <= abv <= lt`. A negative `gt` or a non-positive `lt`
    /// leaves that side unbounded.
    pub fn filter(&self, gt: Option<f64>, lt: Option<f64>) -> Result<Vec<BeerDto>> {
        let min = gt.filter(|gt| *gt >= 0.0);
        let max = lt.filter(|lt| *lt > 0.0);
        Ok(self
            .uow
            .beers()
            .by_alcohol(min, max)?
            .into_iter()
            .map(BeerDto::from)
            .collect())
    }
}
