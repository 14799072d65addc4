use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::ser::{self, Serialize, SerializeStruct, Serializer};

use super::db::Backend;
use super::dto::{BarBeersDto, BarDto, BeerDto, BreweryBeersDto, BreweryDto};

mod bar_beers;
mod bars;
mod beers;
mod breweries;
mod brewery_beers;
mod util;

#[cfg(test)]
mod tests;

#[derive(Serialize)]
pub enum ResponseStatus {
    Success,
    Error,
    Fail,
}

/// Envelope type for API responses
///
/// When serializing as JSON, this will result in a JSON object with the inner object returned
/// using a field name that is specified by the `#[serde(rename="field_name")]` attribute.
/// If no such attribute is specified on `T`, the field will use the type name of `T`.
pub struct ApiResponseEnvelope<T: Serialize>(T);

#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ApiResponseEnvelope<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
}

impl<T> Serialize for ApiResponseEnvelope<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let name = util::response_object_name(&self.0).map_err(ser::Error::custom)?;
        let mut state = serializer.serialize_struct("ApiResponseEnvelope", 1)?;
        state.serialize_field(name, &self.0)?;
        state.end()
    }
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn new(data: T) -> ApiResponse<T> {
        ApiResponse {
            status: ResponseStatus::Success,
            data: Some(ApiResponseEnvelope(data)),
            messages: None,
        }
    }
}

impl ApiResponse<()> {
    /// The request was refused because of something the client sent.
    pub fn fail<S: Into<String>>(message: S) -> ApiResponse<()> {
        ApiResponse {
            status: ResponseStatus::Fail,
            data: None,
            messages: Some(vec![message.into()]),
        }
    }

    /// The server failed to handle an otherwise acceptable request.
    pub fn error<S: Into<String>>(message: S) -> ApiResponse<()> {
        ApiResponse {
            status: ResponseStatus::Error,
            data: None,
            messages: Some(vec![message.into()]),
        }
    }
}

// Named wrappers so collections get a key in the envelope.

#[derive(Serialize)]
#[serde(rename = "bars")]
pub struct Bars(pub Vec<BarDto>);

#[derive(Serialize)]
#[serde(rename = "beers")]
pub struct Beers(pub Vec<BeerDto>);

#[derive(Serialize)]
#[serde(rename = "breweries")]
pub struct Breweries(pub Vec<BreweryDto>);

#[derive(Serialize)]
#[serde(rename = "barBeers")]
pub struct BarBeersList(pub Vec<BarBeersDto>);

#[derive(Serialize)]
#[serde(rename = "breweryBeers")]
pub struct BreweryBeersList(pub Vec<BreweryBeersDto>);

fn not_found<S: Into<String>>(message: S) -> HttpResponse {
    let message = message.into();
    info!("{}", message);
    HttpResponse::NotFound().json(ApiResponse::fail(message))
}

fn bad_request<S: Into<String>>(message: S) -> HttpResponse {
    let message = message.into();
    warn!("{}", message);
    HttpResponse::BadRequest().json(ApiResponse::fail(message))
}

fn created<T: Serialize>(location: String, data: T) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ApiResponse::new(data))
}

/// Register every route of the catalog API, served from backend `B`.
///
/// `{id}` segments only match digits, so `/api/bar/beer` never reaches a
/// handler expecting a bar id.
pub fn configure<B: Backend>(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(format!("Invalid request body: {}", err));
        InternalError::from_response(err, response).into()
    });
    let query = web::QueryConfig::default().error_handler(|err, _req| {
        let response = bad_request(format!("Invalid query string: {}", err));
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json)
        .app_data(query)
        .service(
            web::resource("/api/bar/beer")
                .route(web::get().to(bar_beers::list::<B>))
                .route(web::post().to(bar_beers::add::<B>)),
        )
        .service(web::resource(r"/api/bar/{id:\d+}/beer").route(web::get().to(bar_beers::get::<B>)))
        .service(
            web::resource("/api/bar")
                .route(web::get().to(bars::list::<B>))
                .route(web::post().to(bars::add::<B>)),
        )
        .service(
            web::resource(r"/api/bar/{id:\d+}")
                .route(web::get().to(bars::get::<B>))
                .route(web::put().to(bars::update::<B>)),
        )
        .service(
            web::resource("/api/beer")
                .route(web::get().to(beers::list::<B>))
                .route(web::post().to(beers::add::<B>)),
        )
        .service(
            web::resource(r"/api/beer/{id:\d+}")
                .route(web::get().to(beers::get::<B>))
                .route(web::put().to(beers::update::<B>)),
        )
        .service(
            web::resource("/api/brewery/beer")
                .route(web::get().to(brewery_beers::list::<B>))
                .route(web::post().to(brewery_beers::add::<B>)),
        )
        .service(
            web::resource(r"/api/brewery/{id:\d+}/beer")
                .route(web::get().to(brewery_beers::get::<B>)),
        )
        .service(
            web::resource("/api/brewery")
                .route(web::get().to(breweries::list::<B>))
                .route(web::post().to(breweries::add::<B>)),
        )
        .service(
            web::resource(r"/api/brewery/{id:\d+}")
                .route(web::get().to(breweries::get::<B>))
                .route(web::put().to(breweries::update::<B>)),
        );
}
