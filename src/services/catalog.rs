//! Query facade over the search client.
//!
//! Each operation is one round trip to the search service followed by local
//! reshaping: slice the hits for the requested page, update the sliding
//! window, and hand back the view model together with the paging state the
//! caller must return on its next request. Nothing here holds state between
//! calls.

use crate::error::{AppError, AppResult};
use crate::models::{
    Hotel, NextPageResponse, PageState, PagingDirective, SearchPage, map_slice,
};
use crate::pagination::{self, PAGE_SIZE};
use crate::services::search_client::{FACET_FIELDS, SearchClient};

/// Run a new search: fresh paging state, page zero.
pub async fn search(client: &SearchClient, term: &str) -> AppResult<SearchPage> {
    let response = client.query(term).await?;
    assemble_page(term, &response.value, 0, 0)
}

/// Navigate within an existing search using a paging directive and the
/// state from the previous response.
pub async fn page(
    client: &SearchClient,
    directive: PagingDirective,
    state: PageState,
) -> AppResult<SearchPage> {
    let target = resolve_directive(directive, &state);
    let response = client.query(&state.search_text).await?;
    assemble_page(
        &state.search_text,
        &response.value,
        target,
        state.left_most_page,
    )
}

/// Advance one page and return the incremental name/summary line list.
///
/// This surface feeds an appending list, so unlike [`page`] it does not
/// recompute the window (the anchor carries through) and it does not clamp:
/// walking past the last page yields an empty list, which is the caller's
/// end-of-results signal.
pub async fn next(client: &SearchClient, state: PageState) -> AppResult<NextPageResponse> {
    let response = client.query(&state.search_text).await?;
    next_lines(state, &response.value)
}

/// Type-ahead suggestions from the index suggester.
pub async fn suggest(
    client: &SearchClient,
    term: &str,
    fuzzy: bool,
    highlights: bool,
) -> AppResult<Vec<String>> {
    client.suggest(term, fuzzy, highlights).await
}

/// Term completions from the index suggester.
pub async fn autocomplete(client: &SearchClient, term: &str) -> AppResult<Vec<String>> {
    client.autocomplete(term).await
}

/// Facet values over the fixed facet fields, concatenated in field order,
/// counts discarded.
pub async fn facets(client: &SearchClient) -> AppResult<Vec<String>> {
    let response = client.facet_query().await?;
    let buckets_by_field = response.facets.unwrap_or_default();

    let mut values = Vec::new();
    for (field, _cap) in FACET_FIELDS {
        if let Some(buckets) = buckets_by_field.get(field) {
            values.extend(buckets.iter().map(|bucket| bucket.value_text()));
        }
    }
    Ok(values)
}

/// Unwrap the caller-carried paging state, failing explicitly when a paging
/// request arrives without the state from the previous turn. Defaulting
/// here would mask navigation bugs.
pub fn require_state(state: Option<PageState>) -> AppResult<PageState> {
    state.ok_or_else(|| {
        AppError::StaleSession("paging requested without state from a previous search".to_string())
    })
}

/// Resolve a directive to a target page index, relative to the previous
/// state where the directive calls for it. The result may be out of range;
/// [`assemble_page`] clamps.
fn resolve_directive(directive: PagingDirective, state: &PageState) -> i64 {
    match directive {
        PagingDirective::First => 0,
        PagingDirective::Next => state.current_page as i64 + 1,
        PagingDirective::Prev => state.current_page as i64 - 1,
        PagingDirective::Page(n) => n,
    }
}

/// Assemble one page of results: clamp the target page into range, slice
/// the hits, recompute the sliding window, and build the state to hand
/// back. Pure - the only inputs are the arguments.
///
/// The hit count is the authoritative total here; bounds are recomputed
/// from it so the mapper's range check cannot trip on a stale count.
pub fn assemble_page(
    search_text: &str,
    hits: &[Hotel],
    target_page: i64,
    previous_left_most: usize,
) -> AppResult<SearchPage> {
    let total = hits.len();
    let last_page = pagination::total_pages(total).saturating_sub(1) as i64;
    let page = target_page.clamp(0, last_page) as usize;

    let window = pagination::compute_window(total, page, previous_left_most);

    let start = page * PAGE_SIZE;
    let end = total.min((page + 1) * PAGE_SIZE);
    let hotels = map_slice(hits, start, end)?;

    Ok(SearchPage {
        result_count: total,
        hotels,
        state: PageState {
            search_text: search_text.to_string(),
            current_page: page,
            total_count: total,
            total_pages: window.total_pages,
            left_most_page: window.left_most_page.max(0) as usize,
            page_range: window.page_range.max(0) as usize,
        },
    })
}

/// Incremental-list counterpart of [`assemble_page`]: advance to the next
/// page without clamping or window updates and render each record as a
/// name line followed by a summary line.
fn next_lines(state: PageState, hits: &[Hotel]) -> AppResult<NextPageResponse> {
    let total = hits.len();
    let target = state.current_page + 1;

    let end = total.min((target + 1) * PAGE_SIZE);
    let start = (target * PAGE_SIZE).min(end);
    let records = map_slice(hits, start, end)?;

    let items = records
        .iter()
        .flat_map(|record| [record.name.clone(), record.render_summary()])
        .collect();

    Ok(NextPageResponse {
        items,
        state: PageState {
            current_page: target,
            total_count: total,
            total_pages: pagination::total_pages(total),
            ..state
        },
    })
}
