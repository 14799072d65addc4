use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};

use super::configure;
use crate::services::fixtures::seeded;
use crate::store::MemoryStore;

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store))
                .configure(configure::<MemoryStore>),
        )
        .await
    };
}

#[actix_rt::test]
async fn empty_catalog_answers_not_found() {
    let app = app!(MemoryStore::new());

    for path in &["/api/bar", "/api/beer", "/api/brewery", "/api/bar/beer"] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", path);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "Fail");
        assert!(body.get("data").is_none());
    }
}

#[actix_rt::test]
async fn lists_are_wrapped_in_named_envelopes() {
    let app = app!(seeded());

    let req = test::TestRequest::get().uri("/api/bar").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({
            "status": "Success",
            "data": {"bars": [{"barId": 1, "name": "Rose", "address": "1 Main Street"}]}
        })
    );

    let req = test::TestRequest::get().uri("/api/brewery/5").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["brewery"]["name"], "Hill Farm");
}

#[actix_rt::test]
async fn unknown_id_is_not_found() {
    let app = app!(seeded());
    let req = test::TestRequest::get().uri("/api/beer/77").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["messages"][0], "Beer is not found for BeerId : 77");
}

#[actix_rt::test]
async fn created_beer_has_a_location() {
    let app = app!(MemoryStore::new());
    let req = test::TestRequest::post()
        .uri("/api/beer")
        .set_json(json!({"beerId": 3, "name": "Stout", "percentageAlcoholByVolume": 6.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/beer/3");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["beer"]["name"], "Stout");

    let req = test::TestRequest::get().uri("/api/beer/3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn non_positive_id_is_a_bad_request() {
    let app = app!(MemoryStore::new());
    let req = test::TestRequest::post()
        .uri("/api/brewery")
        .set_json(json!({"breweryId": 0, "name": "Nowhere"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn duplicate_is_a_validation_error() {
    let app = app!(seeded());
    let req = test::TestRequest::post()
        .uri("/api/bar")
        .set_json(json!({"barId": 1, "name": "Rose"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "status": "Fail",
            "messages": ["Validation error , Bar is already present for given bar id : 1."]
        })
    );
}

#[actix_rt::test]
async fn update_checks_path_against_body() {
    let app = app!(seeded());

    let req = test::TestRequest::put()
        .uri("/api/bar/2")
        .set_json(json!({"barId": 1, "name": "Rose"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/bar/1")
        .set_json(json!({"barId": 1, "name": "Rose & Crown"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/bar/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["bar"]["name"], "Rose & Crown");
    assert!(body["data"]["bar"]["address"].is_null());
}

#[actix_rt::test]
async fn malformed_body_is_a_bad_request() {
    let app = app!(MemoryStore::new());
    let req = test::TestRequest::post()
        .uri("/api/bar")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"barId\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Fail");
}

#[actix_rt::test]
async fn beers_filtered_by_alcohol() {
    let app = app!(MemoryStore::new());
    for (id, abv) in &[(1, 3.0), (2, 4.5), (3, 6.0)] {
        let req = test::TestRequest::post()
            .uri("/api/beer")
            .set_json(json!({
                "beerId": id,
                "name": format!("Beer {}", id),
                "percentageAlcoholByVolume": abv
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/beer?gtAlcoholByVolume=4.0&ltAlcoholByVolume=5.5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["data"]["beers"],
        json!([{"beerId": 2, "name": "Beer 2", "percentageAlcoholByVolume": 4.5}])
    );

    let req = test::TestRequest::get()
        .uri("/api/beer?gtAlcoholByVolume=7")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/beer?ltAlcoholByVolume=-1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/beer?gtAlcoholByVolume=strong")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn linking_a_beer_to_a_bar() {
    let app = app!(seeded());

    let req = test::TestRequest::post()
        .uri("/api/bar/beer")
        .set_json(json!({"id": 1, "barId": 1, "beerId": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/bar/1/beer");

    let req = test::TestRequest::get().uri("/api/bar/1/beer").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["data"]["barBeers"],
        json!([{
            "bar": {"barId": 1, "name": "Rose", "address": "1 Main Street"},
            "beers": [{"beerId": 10, "name": "Lager", "percentageAlcoholByVolume": 4.5}]
        }])
    );

    let req = test::TestRequest::post()
        .uri("/api/bar/beer")
        .set_json(json!({"id": 2, "barId": 99, "beerId": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["messages"][0],
        "Validation error , Bar is not present for this BarId : 99"
    );

    let req = test::TestRequest::get().uri("/api/bar/99/beer").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn brewery_without_beers_is_still_listed() {
    let app = app!(seeded());
    let req = test::TestRequest::get().uri("/api/brewery/beer").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["data"]["breweryBeers"],
        json!([{"brewery": {"breweryId": 5, "name": "Hill Farm"}, "beers": []}])
    );

    let req = test::TestRequest::post()
        .uri("/api/brewery/beer")
        .set_json(json!({"id": 0, "breweryId": 5, "beerId": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
