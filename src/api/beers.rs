use actix_web::{web, HttpResponse};

use super::{bad_request, created, not_found, ApiResponse, Beers};
use crate::db::{self, Backend};
use crate::dto::BeerDto;
use crate::error::Result;
use crate::services::BeerService;

/// Optional inclusive ABV bounds for the beer listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholRange {
    gt_alcohol_by_volume: Option<f64>,
    lt_alcohol_by_volume: Option<f64>,
}

impl AlcoholRange {
    fn is_unbounded(&self) -> bool {
        self.gt_alcohol_by_volume.is_none() && self.lt_alcohol_by_volume.is_none()
    }

    fn negative_bound(&self) -> Option<f64> {
        self.gt_alcohol_by_volume
            .into_iter()
            .chain(self.lt_alcohol_by_volume)
            .find(|bound| *bound < 0.0)
    }
}

/// All beers, or only those inside the requested alcohol range.
pub async fn list<B: Backend>(
    backend: web::Data<B>,
    range: web::Query<AlcoholRange>,
) -> Result<HttpResponse> {
    let range = range.into_inner();
    if let Some(bound) = range.negative_bound() {
        return Ok(bad_request(format!(
            "Alcohol by volume bounds must not be negative : {}",
            bound
        )));
    }

    let beers = db::execute(backend.get_ref(), move |uow| {
        let service = BeerService::new(uow);
        if range.is_unbounded() {
            service.get_all()
        } else {
            service.filter(range.gt_alcohol_by_volume, range.lt_alcohol_by_volume)
        }
    })
    .await?;

    if beers.is_empty() {
        return Ok(not_found("Beer data not found."));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(Beers(beers))))
}

pub async fn get<B: Backend>(backend: web::Data<B>, id: web::Path<i32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    match db::execute(backend.get_ref(), move |uow| BeerService::new(uow).get_by_id(id)).await? {
        Some(beer) => Ok(HttpResponse::Ok().json(ApiResponse::new(beer))),
        None => Ok(not_found(format!("Beer is not found for BeerId : {}", id))),
    }
}

pub async fn update<B: Backend>(
    backend: web::Data<B>,
    id: web::Path<i32>,
    beer: web::Json<BeerDto>,
) -> Result<HttpResponse> {
    let (id, beer) = (id.into_inner(), beer.into_inner());
    if beer.beer_id != id {
        return Ok(bad_request(format!(
            "BeerId {} in the body does not match {} in the path.",
            beer.beer_id, id
        )));
    }
    db::execute(backend.get_ref(), move |uow| BeerService::new(uow).update(id, beer)).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn add<B: Backend>(
    backend: web::Data<B>,
    beer: web::Json<BeerDto>,
) -> Result<HttpResponse> {
    let beer = beer.into_inner();
    if beer.beer_id <= 0 {
        return Ok(bad_request(format!("Invalid BeerId : {}", beer.beer_id)));
    }
    let added = db::execute(backend.get_ref(), move |uow| BeerService::new(uow).add(beer)).await?;
    Ok(created(format!("/api/beer/{}", added.beer_id), added))
}
