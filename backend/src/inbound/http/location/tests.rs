//! Tests for the point lookup handler.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::Region;
use crate::domain::ports::{MockRegionRepository, RegionRepository};
use crate::inbound::http::validation::form_config;
use crate::outbound::memory::RegionStore;

fn test_app(
    regions: Arc<dyn RegionRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(regions)))
        .app_data(form_config())
        .service(locate)
}

fn square(name: &str, min: f64, max: f64) -> Region {
    Region::new(
        name,
        [[min, min], [min, max], [max, max], [max, min], [min, min]]
            .map(Coordinate::from)
            .to_vec(),
    )
    .expect("valid region")
}

#[fixture]
fn store() -> Arc<RegionStore> {
    let store = RegionStore::new();
    store.create(square("Outer", 0.0, 10.0)).expect("seed");
    store.create(square("Inner", 2.0, 4.0)).expect("seed");
    store.create(square("Elsewhere", 20.0, 30.0)).expect("seed");
    Arc::new(store)
}

async fn post_form(regions: Arc<dyn RegionRepository>, body: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(regions)).await;
    let req = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(body.to_owned())
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}

#[rstest]
#[case("longitude=5&latitude=5", json!(["Outer"]))]
#[case("longitude=3&latitude=3", json!(["Inner", "Outer"]))]
#[case("longitude=25&latitude=25", json!(["Elsewhere"]))]
#[case("latitude=3&longitude=3&extra=ignored", json!(["Inner", "Outer"]))]
#[case("longitude=+5+&latitude=5", json!(["Outer"]))]
#[actix_web::test]
async fn returns_sorted_names_of_containing_regions(
    store: Arc<RegionStore>,
    #[case] body: &str,
    #[case] expected: Value,
) {
    let (status, names) = post_form(store, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names, expected);
}

#[rstest]
#[actix_web::test]
async fn point_outside_every_region_is_not_found(store: Arc<RegionStore>) {
    let (status, body) = post_form(store, "longitude=15&latitude=-1.5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "[15, -1.5] not within any state");
}

#[rstest]
#[actix_web::test]
async fn empty_store_reports_not_found() {
    let (status, _) = post_form(Arc::new(RegionStore::new()), "longitude=1&latitude=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case("latitude=5", "longitude")]
#[case("longitude=5", "latitude")]
#[case("", "longitude")]
#[actix_web::test]
async fn missing_coordinate_is_rejected(
    store: Arc<RegionStore>,
    #[case] body: &str,
    #[case] field: &str,
) {
    let (status, body) = post_form(store, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], format!("{field} is required"));
    assert_eq!(body["details"]["code"], "missing_field");
}

#[rstest]
#[case("longitude=east&latitude=5", "longitude", "east")]
#[case("longitude=5&latitude=", "latitude", "")]
#[case("longitude=5&latitude=NaN", "latitude", "NaN")]
#[case("longitude=inf&latitude=5", "longitude", "inf")]
#[actix_web::test]
async fn non_numeric_coordinate_is_rejected(
    store: Arc<RegionStore>,
    #[case] body: &str,
    #[case] field: &str,
    #[case] value: &str,
) {
    let (status, body) = post_form(store, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], format!("invalid {field}: {value}"));
    assert_eq!(body["details"]["code"], "invalid_number");
}

#[rstest]
#[actix_web::test]
async fn invalid_input_never_reaches_repository() {
    let mut repo = MockRegionRepository::new();
    repo.expect_list_regions().times(0);
    let (status, _) = post_form(Arc::new(repo), "longitude=x&latitude=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn lookup_reads_a_snapshot_once() {
    let mut repo = MockRegionRepository::new();
    repo.expect_list_regions()
        .times(1)
        .returning(|| vec![square("Outer", 0.0, 10.0)]);
    let (status, names) = post_form(Arc::new(repo), "longitude=1&latitude=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names, json!(["Outer"]));
}
