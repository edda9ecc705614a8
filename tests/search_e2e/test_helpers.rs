//! Shared test helpers for search E2E tests.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use secrecy::SecretString;
use serde_json::{Value, json};

use stayfinder_lib::api;
use stayfinder_lib::config::SearchSettings;
use stayfinder_lib::services::SearchClient;

/// Search settings pointing at a mock service instance.
pub fn test_settings(endpoint: &str) -> SearchSettings {
    SearchSettings {
        endpoint: endpoint.to_string(),
        query_key: SecretString::from("e2e-test-query-key".to_string()),
        index: "hotels".to_string(),
        suggester: "sg".to_string(),
        api_version: "2023-11-01".to_string(),
        max_results: 1000,
    }
}

/// Create a test app wired to the mock service at `endpoint`.
pub async fn init_app(
    endpoint: &str,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let client = SearchClient::new(&test_settings(endpoint));

    test::init_service(
        App::new().app_data(web::Data::new(client)).service(
            web::scope("/api/v1")
                .configure(api::configure_health_routes)
                .configure(api::configure_search_routes),
        ),
    )
    .await
}

/// One hotel document as the index would return it.
pub fn hotel_doc(name: &str, description: &str, tags: &[&str], rooms: &[(f64, &str)]) -> Value {
    json!({
        "HotelName": name,
        "Description": description,
        "Category": "Budget",
        "Tags": tags,
        "Rooms": rooms
            .iter()
            .map(|(rate, beds)| json!({"BaseRate": rate, "BedOptions": beds}))
            .collect::<Vec<_>>(),
    })
}

/// Seven hotels, one of them without room data.
pub fn sample_hotels() -> Vec<Value> {
    vec![
        hotel_doc(
            "Sublime Cliff Hotel",
            "Sublime Cliff Hotel is located in the heart of the old town.",
            &["concierge", "view"],
            &[(212.0, "1 Queen Bed")],
        ),
        hotel_doc(
            "Triple Landscape Hotel",
            "The Hotel stands out for its gastronomic excellence.",
            &["air conditioning", "bar", "pool"],
            &[(149.99, "1 King Bed"), (79.99, "2 Queen Beds")],
        ),
        hotel_doc(
            "Twin Dome Hotel",
            "The hotel is situated in a nineteenth century plaza.",
            &["pool", "free wifi"],
            &[(99.0, "2 Double Beds")],
        ),
        hotel_doc(
            "Secret Point Hotel",
            "Budget hotel close to the old town.",
            &[],
            &[],
        ),
        hotel_doc(
            "Scarlet Harbor Hotel",
            "Harborside hotel with sea views.",
            &["view", "restaurant"],
            &[(189.0, "1 King Bed")],
        ),
        hotel_doc(
            "Royal Cottage Hotel",
            "Quiet hotel on the outskirts.",
            &["garden"],
            &[(85.5, "1 Double Bed")],
        ),
        hotel_doc(
            "Stone Lion Hotel",
            "Historic hotel by the river.",
            &["free wifi"],
            &[(120.0, "2 Queen Beds")],
        ),
    ]
}

/// A uniform catalog of `count` resort documents for paging walks.
pub fn resort_hotels(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            hotel_doc(
                &format!("Resort {}", i),
                &format!("Resort number {} by the beach.", i),
                &["beach"],
                &[(100.0 + i as f64, "1 King Bed")],
            )
        })
        .collect()
}

/// POST /api/v1/search and decode the response body.
pub async fn do_search<S, B>(app: &S, search_text: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .set_json(json!({"search_text": search_text}))
        .to_request();
    test::call_and_read_body_json(app, req).await
}

/// POST /api/v1/search/page with a directive and the carried state.
pub async fn do_page<S, B>(app: &S, paging: &str, state: &Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/search/page")
        .set_json(json!({"paging": paging, "state": state}))
        .to_request();
    test::call_and_read_body_json(app, req).await
}
