//! Search API endpoints.
//!
//! Paging state travels in the request and response bodies: every search
//! and page response carries the state the client must send back on its
//! next paging call. The server keeps nothing between requests.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{NextRequest, PagingDirective, PagingRequest, SearchRequest};
use crate::services::SearchClient;
use crate::services::catalog;

/// Suggest query parameters.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestParams {
    /// Partial term typed so far
    pub term: Option<String>,
    /// Tolerate one edit (typo) when matching
    #[serde(default)]
    pub fuzzy: bool,
    /// Wrap matched substrings in bold markup
    #[serde(default)]
    pub highlights: bool,
}

/// Autocomplete query parameters.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AutocompleteParams {
    /// Partial term typed so far
    pub term: Option<String>,
}

/// Configure search routes.
pub fn configure_search_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(search)
        .service(page)
        .service(next)
        .service(suggest)
        .service(autocomplete)
        .service(facets);
}

fn required_term(term: Option<String>) -> AppResult<String> {
    match term {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(AppError::InvalidInput("term must not be empty".to_string())),
    }
}

/// Run a new search.
///
/// POST /api/v1/search
#[utoipa::path(
    post,
    path = "/api/v1/search",
    tag = "Search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "First page of results with fresh paging state", body = crate::models::SearchPage),
        (status = 502, description = "Search service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[post("/search")]
pub async fn search(
    client: web::Data<SearchClient>,
    body: web::Json<SearchRequest>,
) -> AppResult<HttpResponse> {
    let result = catalog::search(client.get_ref(), body.term()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Navigate to another page of the current search.
///
/// POST /api/v1/search/page
#[utoipa::path(
    post,
    path = "/api/v1/search/page",
    tag = "Search",
    request_body = PagingRequest,
    responses(
        (status = 200, description = "Requested page with updated paging state", body = crate::models::SearchPage),
        (status = 400, description = "Unparseable paging token", body = crate::error::ErrorResponse),
        (status = 409, description = "Missing paging state from the previous request", body = crate::error::ErrorResponse),
        (status = 502, description = "Search service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[post("/search/page")]
pub async fn page(
    client: web::Data<SearchClient>,
    body: web::Json<PagingRequest>,
) -> AppResult<HttpResponse> {
    let PagingRequest { paging, state } = body.into_inner();
    let directive = PagingDirective::parse(&paging)?;
    let state = catalog::require_state(state)?;

    let result = catalog::page(client.get_ref(), directive, state).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Fetch the next page as an incremental name/summary line list.
///
/// POST /api/v1/search/next
#[utoipa::path(
    post,
    path = "/api/v1/search/next",
    tag = "Search",
    request_body = NextRequest,
    responses(
        (status = 200, description = "Lines for the next page; empty past the last page", body = crate::models::NextPageResponse),
        (status = 409, description = "Missing paging state from the previous request", body = crate::error::ErrorResponse),
        (status = 502, description = "Search service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[post("/search/next")]
pub async fn next(
    client: web::Data<SearchClient>,
    body: web::Json<NextRequest>,
) -> AppResult<HttpResponse> {
    let state = catalog::require_state(body.into_inner().state)?;

    let result = catalog::next(client.get_ref(), state).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Type-ahead suggestions.
///
/// GET /api/v1/suggest?term=po&fuzzy=true&highlights=true
#[utoipa::path(
    get,
    path = "/api/v1/suggest",
    tag = "Search",
    params(
        ("term" = String, Query, description = "Partial term typed so far"),
        ("fuzzy" = Option<bool>, Query, description = "Tolerate one edit when matching (default: false)"),
        ("highlights" = Option<bool>, Query, description = "Wrap matches in bold markup (default: false)")
    ),
    responses(
        (status = 200, description = "Up to 8 suggestion strings", body = Vec<String>),
        (status = 400, description = "Missing term", body = crate::error::ErrorResponse),
        (status = 502, description = "Search service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[get("/suggest")]
pub async fn suggest(
    client: web::Data<SearchClient>,
    query: web::Query<SuggestParams>,
) -> AppResult<HttpResponse> {
    let SuggestParams {
        term,
        fuzzy,
        highlights,
    } = query.into_inner();
    let term = required_term(term)?;

    let suggestions = catalog::suggest(client.get_ref(), &term, fuzzy, highlights).await?;
    Ok(HttpResponse::Ok().json(suggestions))
}

/// Term completions.
///
/// GET /api/v1/autocomplete?term=po
#[utoipa::path(
    get,
    path = "/api/v1/autocomplete",
    tag = "Search",
    params(
        ("term" = String, Query, description = "Partial term typed so far")
    ),
    responses(
        (status = 200, description = "Up to 5 completion strings", body = Vec<String>),
        (status = 400, description = "Missing term", body = crate::error::ErrorResponse),
        (status = 502, description = "Search service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[get("/autocomplete")]
pub async fn autocomplete(
    client: web::Data<SearchClient>,
    query: web::Query<AutocompleteParams>,
) -> AppResult<HttpResponse> {
    let term = required_term(query.into_inner().term)?;

    let completions = catalog::autocomplete(client.get_ref(), &term).await?;
    Ok(HttpResponse::Ok().json(completions))
}

/// Facet values for building filter lists.
///
/// GET /api/v1/facets
#[utoipa::path(
    get,
    path = "/api/v1/facets",
    tag = "Search",
    responses(
        (status = 200, description = "Tag facet values followed by category facet values", body = Vec<String>),
        (status = 502, description = "Search service unavailable", body = crate::error::ErrorResponse)
    )
)]
#[get("/facets")]
pub async fn facets(client: web::Data<SearchClient>) -> AppResult<HttpResponse> {
    let values = catalog::facets(client.get_ref()).await?;
    Ok(HttpResponse::Ok().json(values))
}
