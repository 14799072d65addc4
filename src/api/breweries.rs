use actix_web::{web, HttpResponse};

use super::{bad_request, created, not_found, ApiResponse, Breweries};
use crate::db::{self, Backend};
use crate::dto::BreweryDto;
use crate::error::Result;
use crate::services::BreweryService;

pub async fn list<B: Backend>(backend: web::Data<B>) -> Result<HttpResponse> {
    let breweries =
        db::execute(backend.get_ref(), |uow| BreweryService::new(uow).get_all()).await?;
    if breweries.is_empty() {
        return Ok(not_found("Brewery data not found."));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(Breweries(breweries))))
}

pub async fn get<B: Backend>(backend: web::Data<B>, id: web::Path<i32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    let found =
        db::execute(backend.get_ref(), move |uow| BreweryService::new(uow).get_by_id(id)).await?;
    match found {
        Some(brewery) => Ok(HttpResponse::Ok().json(ApiResponse::new(brewery))),
        None => Ok(not_found(format!("Brewery is not found for BreweryId : {}", id))),
    }
}

pub async fn update<B: Backend>(
    backend: web::Data<B>,
    id: web::Path<i32>,
    brewery: web::Json<BreweryDto>,
) -> Result<HttpResponse> {
    let (id, brewery) = (id.into_inner(), brewery.into_inner());
    if brewery.brewery_id != id {
        return Ok(bad_request(format!(
            "BreweryId {} in the body does not match {} in the path.",
            brewery.brewery_id, id
        )));
    }
    db::execute(backend.get_ref(), move |uow| {
        BreweryService::new(uow).update(id, brewery)
    })
    .await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn add<B: Backend>(
    backend: web::Data<B>,
    brewery: web::Json<BreweryDto>,
) -> Result<HttpResponse> {
    let brewery = brewery.into_inner();
    if brewery.brewery_id <= 0 {
        return Ok(bad_request(format!(
            "Invalid BreweryId : {}",
            brewery.brewery_id
        )));
    }
    let added =
        db::execute(backend.get_ref(), move |uow| BreweryService::new(uow).add(brewery)).await?;
    Ok(created(format!("/api/brewery/{}", added.brewery_id), added))
}
