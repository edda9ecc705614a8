//! Search request/response DTOs and the caller-carried paging state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::HotelSummary;

/// New-search submission.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// The text to search for. Absent is treated as the empty string.
    #[serde(default)]
    pub search_text: Option<String>,
}

impl SearchRequest {
    /// The search text with the never-null invariant applied.
    pub fn term(&self) -> &str {
        self.search_text.as_deref().unwrap_or("")
    }
}

/// Paging submission: a directive token plus the state returned by the
/// previous search or page response.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PagingRequest {
    /// `"first"`, `"next"`, `"prev"`, or an absolute page number
    pub paging: String,
    /// Paging state from the previous response. Absent state on a paging
    /// request is an explicit error, not a silent restart.
    #[serde(default)]
    pub state: Option<PageState>,
}

/// "Next page" submission for the incremental list surface.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NextRequest {
    #[serde(default)]
    pub state: Option<PageState>,
}

/// A parsed paging directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingDirective {
    First,
    Next,
    Prev,
    /// Absolute page number. May be out of range or negative; the facade
    /// clamps before use.
    Page(i64),
}

impl PagingDirective {
    /// Parse a directive token. Anything other than the three keywords must
    /// be an integer page number.
    pub fn parse(token: &str) -> AppResult<Self> {
        match token {
            "first" => Ok(Self::First),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            _ => token
                .trim()
                .parse::<i64>()
                .map(Self::Page)
                .map_err(|_| AppError::InvalidPagingToken(token.to_string())),
        }
    }
}

/// Per-user paging state, threaded through the caller.
///
/// Returned in every search/page response and required back on the next
/// paging request; the server never stores it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageState {
    /// The search text the results belong to
    #[serde(default)]
    pub search_text: String,
    /// Current page index (0-based)
    pub current_page: usize,
    /// Number of results behind this state
    pub total_count: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Leftmost page link currently visible
    pub left_most_page: usize,
    /// Number of page links currently visible
    pub page_range: usize,
}

/// One page of search results with the updated paging state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchPage {
    /// Total number of results for the search text
    pub result_count: usize,
    /// Display records for the current page
    pub hotels: Vec<HotelSummary>,
    /// State to carry into the next paging request
    pub state: PageState,
}

/// Response of the incremental "next page" surface: hotel names alternating
/// with rendered summaries, plus the state for the next request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NextPageResponse {
    pub items: Vec<String>,
    pub state: PageState,
}
