use super::refuse;
use crate::dto::BreweryDto;
use crate::error::Result;
use crate::models::Brewery;
use crate::store::Store;
use crate::unit_of_work::UnitOfWork;

pub struct BreweryService<'a, S> {
    uow: &'a UnitOfWork<S>,
}

impl<'a, S: Store> BreweryService<'a, S> {
    pub fn new(uow: &'a UnitOfWork<S>) -> BreweryService<'a, S> {
        BreweryService { uow }
    }

    pub fn add(&self, dto: BreweryDto) -> Result<BreweryDto> {
        dto.validate()?;
        if self.uow.breweries().exists(|b| b.id == dto.brewery_id)? {
            return Err(refuse(format!(
                "Brewery is already present for given brewery id : {}.",
                dto.brewery_id
            )));
        }
        let added = self.uow.breweries().add(Brewery::from(dto))?;
        self.uow.save()?;
        Ok(added.into())
    }

    pub fn update(&self, id: i32, dto: BreweryDto) -> Result<()> {
        dto.validate()?;
        if !self.uow.breweries().exists(|b| b.id == id)? {
            return Err(refuse(format!(
                "Brewery is not present for given brewery id : {}.",
                id
            )));
        }
        self.uow.breweries().update(id, Brewery::from(dto))?;
        self.uow.save()?;
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<BreweryDto>> {
        Ok(self
            .uow
            .breweries()
            .get_all()?
            .into_iter()
            .map(BreweryDto::from)
            .collect())
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<BreweryDto>> {
        Ok(self.uow.breweries().get_by_id(id)?.map(BreweryDto::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::fixtures::{hill_farm, seeded};

    #[test]
    fn add_then_update() {
        let uow = UnitOfWork::new(crate::store::MemoryStore::new());
        let service = BreweryService::new(&uow);
        service.add(hill_farm()).unwrap();

        let renamed = BreweryDto {
            brewery_id: 5,
            name: "Hill Farm Brewery".into(),
        };
        service.update(5, renamed.clone()).unwrap();
        assert_eq!(service.get_all().unwrap(), vec![renamed]);
    }

    #[test]
    fn conflicts_and_missing_rows_are_refused() {
        let uow = UnitOfWork::new(seeded());
        let service = BreweryService::new(&uow);
        match service.add(hill_farm()) {
            Err(Error::InvalidRequest(message)) => assert_eq!(
                message,
                "Brewery is already present for given brewery id : 5."
            ),
            other => panic!("expected a refusal, got {:?}", other),
        }
        match service.update(6, hill_farm()) {
            Err(Error::InvalidRequest(message)) => assert_eq!(
                message,
                "Brewery is not present for given brewery id : 6."
            ),
            other => panic!("expected a refusal, got {:?}", other),
        }
        assert_eq!(service.get_by_id(6).unwrap(), None);
    }
}
