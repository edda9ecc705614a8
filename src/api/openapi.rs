//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "StayFinder Server",
        version = "0.3.0",
        description = "Web front-end for searching a hotel catalog hosted on a managed search service: paged search, type-ahead suggestions, autocomplete, and facet lists"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        // Search endpoints
        api::search::search,
        api::search::page,
        api::search::next,
        api::search::suggest,
        api::search::autocomplete,
        api::search::facets,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            // Search
            models::hotel::Hotel,
            models::hotel::Room,
            models::hotel::HotelSummary,
            models::search::SearchRequest,
            models::search::PagingRequest,
            models::search::NextRequest,
            models::search::PageState,
            models::search::SearchPage,
            models::search::NextPageResponse,
            api::search::SuggestParams,
            api::search::AutocompleteParams,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Search", description = "Hotel catalog search, suggestions, and facets")
    )
)]
pub struct ApiDoc;
