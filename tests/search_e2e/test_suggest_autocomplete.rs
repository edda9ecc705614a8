//! E2E tests for type-ahead suggestions and autocomplete.

use actix_web::test;
use serde_json::Value;

use super::mock_search_service::MockSearchService;
use super::test_helpers::{init_app, resort_hotels, sample_hotels};

#[actix_web::test]
async fn test_suggest_returns_plain_text_by_default() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/suggest?term=sub")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let suggestions = body.as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0], "Sublime Cliff Hotel");
}

#[actix_web::test]
async fn test_suggest_highlight_wraps_matches_in_bold() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/suggest?term=sub&highlights=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap()[0], "<b>Sub</b>lime Cliff Hotel");
}

#[actix_web::test]
async fn test_suggest_caps_at_eight_results() {
    let mock = MockSearchService::start(resort_hotels(12)).await;
    let app = init_app(&mock.base_url).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/suggest?term=resort")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[actix_web::test]
async fn test_suggest_requires_a_term() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;

    let req = test::TestRequest::get().uri("/api/v1/suggest").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_autocomplete_completes_the_typed_word() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/autocomplete?term=sec")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, serde_json::json!(["secret"]));
}

#[actix_web::test]
async fn test_autocomplete_caps_at_five_results() {
    let mock = MockSearchService::start(resort_hotels(12)).await;
    let app = init_app(&mock.base_url).await;

    // Every document contributes a distinct numbered word.
    let req = test::TestRequest::get()
        .uri("/api/v1/autocomplete?term=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/v1/autocomplete?term=resort")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_autocomplete_requires_a_term() {
    let mock = MockSearchService::start(sample_hotels()).await;
    let app = init_app(&mock.base_url).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/autocomplete")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}
