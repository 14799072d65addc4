use actix_web::{web, HttpResponse};

use super::{bad_request, created, not_found, ApiResponse, BreweryBeersList};
use crate::db::{self, Backend};
use crate::dto::BreweryBeerDto;
use crate::error::Result;
use crate::services::BreweryBeerService;

/// Every brewery together with the beers it brews.
pub async fn list<B: Backend>(backend: web::Data<B>) -> Result<HttpResponse> {
    let all = db::execute(backend.get_ref(), |uow| BreweryBeerService::new(uow).get_all()).await?;
    if all.is_empty() {
        return Ok(not_found("Brewery beer data not found."));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(BreweryBeersList(all))))
}

pub async fn get<B: Backend>(backend: web::Data<B>, id: web::Path<i32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    let found = db::execute(backend.get_ref(), move |uow| {
        BreweryBeerService::new(uow).get_by_id(id)
    })
    .await?;
    if found.is_empty() {
        return Ok(not_found(format!("Brewery is not found for BreweryId : {}", id)));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(BreweryBeersList(found))))
}

pub async fn add<B: Backend>(
    backend: web::Data<B>,
    link: web::Json<BreweryBeerDto>,
) -> Result<HttpResponse> {
    let link = link.into_inner();
    if link.id <= 0 {
        return Ok(bad_request(format!("Invalid BreweryBeer id : {}", link.id)));
    }
    let added =
        db::execute(backend.get_ref(), move |uow| BreweryBeerService::new(uow).add(link)).await?;
    Ok(created(format!("/api/brewery/{}/beer", added.brewery_id), added))
}
