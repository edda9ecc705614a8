//! E2E tests for external-service failure handling.
//!
//! A collaborator outage is terminal for the request: no retries, no
//! partial page, a generic message with a correlation id.

use actix_web::test;
use serde_json::{Value, json};

use super::mock_search_service::MockSearchService;
use super::test_helpers::{init_app, sample_hotels};

#[actix_web::test]
async fn test_search_outage_maps_to_bad_gateway() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;
    mock.set_fail(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .set_json(json!({"search_text": "hotel"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EXTERNAL_SERVICE_ERROR");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("correlation id"));
    // The upstream cause stays in the server logs.
    assert!(!message.contains("outage"));
}

#[actix_web::test]
async fn test_suggest_outage_maps_to_bad_gateway() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;
    mock.set_fail(true);

    let req = test::TestRequest::get()
        .uri("/api/v1/suggest?term=sub")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);
}

#[actix_web::test]
async fn test_facets_outage_maps_to_bad_gateway() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;
    mock.set_fail(true);

    let req = test::TestRequest::get().uri("/api/v1/facets").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);
}

#[actix_web::test]
async fn test_recovery_after_outage() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;

    mock.set_fail(true);
    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .set_json(json!({"search_text": "hotel"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    // The client holds no per-call state, so the next request goes through.
    mock.set_fail(false);
    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .set_json(json!({"search_text": "hotel"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
