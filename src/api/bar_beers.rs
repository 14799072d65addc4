use actix_web::{web, HttpResponse};

use super::{bad_request, created, not_found, ApiResponse, BarBeersList};
use crate::db::{self, Backend};
use crate::dto::BarBeerDto;
use crate::error::Result;
use crate::services::BarBeerService;

/// Every bar together with the beers it serves.
pub async fn list<B: Backend>(backend: web::Data<B>) -> Result<HttpResponse> {
    let all = db::execute(backend.get_ref(), |uow| BarBeerService::new(uow).get_all()).await?;
    if all.is_empty() {
        return Ok(not_found("Bar beer data not found."));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(BarBeersList(all))))
}

pub async fn get<B: Backend>(backend: web::Data<B>, id: web::Path<i32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    let found =
        db::execute(backend.get_ref(), move |uow| BarBeerService::new(uow).get_by_id(id)).await?;
    if found.is_empty() {
        return Ok(not_found(format!("Bar is not found for BarId : {}", id)));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(BarBeersList(found))))
}

pub async fn add<B: Backend>(
    backend: web::Data<B>,
    link: web::Json<BarBeerDto>,
) -> Result<HttpResponse> {
    let link = link.into_inner();
    if link.id <= 0 {
        return Ok(bad_request(format!("Invalid BarBeer id : {}", link.id)));
    }
    let added =
        db::execute(backend.get_ref(), move |uow| BarBeerService::new(uow).add(link)).await?;
    Ok(created(format!("/api/bar/{}/beer", added.bar_id), added))
}
