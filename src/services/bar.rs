use super::refuse;
use crate::dto::BarDto;
use crate::error::Result;
use crate::models::Bar;
use crate::store::Store;
use crate::unit_of_work::UnitOfWork;

pub struct BarService<'a, S> {
    uow: &'a UnitOfWork<S>,
}

impl<'a, S: Store> BarService<'a, S> {
    pub fn new(uow: &'a UnitOfWork<S>) -> BarService<'a, S> {
        BarService { uow }
    }

    pub fn add(&self, dto: BarDto) -> Result<BarDto> {
        dto.validate()?;
        if self.uow.bars().exists(|bar| bar.id == dto.bar_id)? {
            return Err(refuse(format!(
                "Bar is already present for given bar id : {}.",
                dto.bar_id
            )));
        }
        let added = self.uow.bars().add(Bar::from(dto))?;
        self.uow.save()?;
        Ok(added.into())
    }

    pub fn update(&self, id: i32, dto: BarDto) -> Result<()> {
        dto.validate()?;
        if !self.uow.bars().exists(|bar| bar.id == id)? {
            return Err(refuse(format!(
                "Bar is not present for given bar id : {}.",
                id
            )));
        }
        self.uow.bars().update(id, Bar::from(dto))?;
        self.uow.save()?;
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<BarDto>> {
        Ok(self
            .uow
            .bars()
            .get_all()?
            .into_iter()
            .map(BarDto::from)
            .collect())
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<BarDto>> {
        Ok(self.uow.bars().get_by_id(id)?.map(BarDto::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::fixtures::{rose, seeded};
    use crate::store::MemoryStore;

    #[test]
    fn added_bar_reads_back_unchanged() {
        let uow = UnitOfWork::new(MemoryStore::new());
        let service = BarService::new(&uow);
        assert_eq!(service.add(rose()).unwrap(), rose());
        assert_eq!(service.get_by_id(1).unwrap(), Some(rose()));
        assert_eq!(service.get_all().unwrap(), vec![rose()]);
    }

    #[test]
    fn duplicate_id_is_refused() {
        let uow = UnitOfWork::new(seeded());
        let service = BarService::new(&uow);
        match service.add(rose()) {
            Err(Error::InvalidRequest(message)) => {
                assert_eq!(message, "Bar is already present for given bar id : 1.")
            }
            other => panic!("expected a refusal, got {:?}", other),
        }
        assert_eq!(uow.pending(), 0);
    }

    #[test]
    fn update_of_unknown_bar_changes_nothing() {
        let store = seeded();
        let uow = UnitOfWork::new(store.clone());
        let service = BarService::new(&uow);
        let mut ghost = rose();
        ghost.bar_id = 2;

        match service.update(2, ghost) {
            Err(Error::InvalidRequest(message)) => {
                assert_eq!(message, "Bar is not present for given bar id : 2.")
            }
            other => panic!("expected a refusal, got {:?}", other),
        }
        assert_eq!(uow.pending(), 0);
        assert_eq!(service.get_all().unwrap(), vec![rose()]);
    }

    #[test]
    fn update_replaces_every_field() {
        let uow = UnitOfWork::new(seeded());
        let service = BarService::new(&uow);
        let renamed = BarDto {
            bar_id: 1,
            name: "Rose & Crown".into(),
            address: None,
        };
        service.update(1, renamed.clone()).unwrap();
        assert_eq!(service.get_by_id(1).unwrap(), Some(renamed));
    }

    #[test]
    fn blank_name_is_refused_before_anything_else() {
        let uow = UnitOfWork::new(MemoryStore::new());
        let service = BarService::new(&uow);
        let mut nameless = rose();
        nameless.name = String::new();
        assert!(service.add(nameless).is_err());
        assert!(service.get_all().unwrap().is_empty());
    }
}
