use actix_web::{web, HttpResponse};

use super::{bad_request, created, not_found, ApiResponse, Bars};
use crate::db::{self, Backend};
use crate::dto::BarDto;
use crate::error::Result;
use crate::services::BarService;

pub async fn list<B: Backend>(backend: web::Data<B>) -> Result<HttpResponse> {
    let bars = db::execute(backend.get_ref(), |uow| BarService::new(uow).get_all()).await?;
    if bars.is_empty() {
        return Ok(not_found("Bar data not found."));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(Bars(bars))))
}

pub async fn get<B: Backend>(backend: web::Data<B>, id: web::Path<i32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    match db::execute(backend.get_ref(), move |uow| BarService::new(uow).get_by_id(id)).await? {
        Some(bar) => Ok(HttpResponse::Ok().json(ApiResponse::new(bar))),
        None => Ok(not_found(format!("Bar is not found for BarId : {}", id))),
    }
}

pub async fn update<B: Backend>(
    backend: web::Data<B>,
    id: web::Path<i32>,
    bar: web::Json<BarDto>,
) -> Result<HttpResponse> {
    let (id, bar) = (id.into_inner(), bar.into_inner());
    if bar.bar_id != id {
        return Ok(bad_request(format!(
            "BarId {} in the body does not match {} in the path.",
            bar.bar_id, id
        )));
    }
    db::execute(backend.get_ref(), move |uow| BarService::new(uow).update(id, bar)).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn add<B: Backend>(
    backend: web::Data<B>,
    bar: web::Json<BarDto>,
) -> Result<HttpResponse> {
    let bar = bar.into_inner();
    if bar.bar_id <= 0 {
        return Ok(bad_request(format!("Invalid BarId : {}", bar.bar_id)));
    }
    let added = db::execute(backend.get_ref(), move |uow| BarService::new(uow).add(bar)).await?;
    Ok(created(format!("/api/bar/{}", added.bar_id), added))
}
