//! Sliding-window pagination over a bounded result set.
//!
//! Results are shown three to a page, with a window of up to five clickable
//! page links. The window slides by two pages when the user navigates onto
//! its leading or trailing edge, so the current page always has neighbours
//! visible without rendering every page number.

/// Results shown per page.
pub const PAGE_SIZE: usize = 3;

/// Maximum number of page links rendered at once.
pub const WINDOW_SIZE: i64 = 5;

/// How far the window slides when the current page reaches its edge.
pub const WINDOW_STEP: i64 = 2;

/// Output of one window computation.
///
/// `left_most_page` is the raw sliding-window value and may be negative when
/// there are fewer than [`WINDOW_SIZE`] pages in total; callers clamp it to
/// zero before rendering. `page_range` is the number of page links actually
/// visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total_pages: usize,
    pub page: usize,
    pub left_most_page: i64,
    pub page_range: i64,
}

/// Total page count for `total_count` results at [`PAGE_SIZE`] per page.
///
/// Zero results means zero pages.
pub fn total_pages(total_count: usize) -> usize {
    (total_count + PAGE_SIZE - 1) / PAGE_SIZE
}

/// Recompute the sliding window for a navigation to `page`.
///
/// Pure and deterministic: no bounds validation is performed on `page`
/// itself (callers decide whether to clamp or reject out-of-range targets
/// before arriving here). The rules, evaluated in order:
///
/// 1. Page zero resets the window to the far left.
/// 2. Navigating onto or before the leftmost visible link slides the window
///    back by [`WINDOW_STEP`], clamped at zero.
/// 3. Navigating onto the last visible link (`page >= left_most + WINDOW_SIZE - 1`)
///    slides the window forward by [`WINDOW_STEP`], capped so the window's
///    right edge never passes the last page.
/// 4. Otherwise the window stays put.
pub fn compute_window(total_count: usize, page: usize, previous_left_most: usize) -> PageWindow {
    let pages = total_pages(total_count);

    let tp = pages as i64;
    let p = page as i64;
    let prev = previous_left_most as i64;

    let left_most_page = if p == 0 {
        0
    } else if p <= prev {
        (p - WINDOW_STEP).max(0)
    } else if p >= prev + WINDOW_SIZE - 1 {
        // tp - WINDOW_SIZE goes negative when there are fewer pages than
        // window slots; callers clamp for display.
        (prev + WINDOW_STEP).min(tp - WINDOW_SIZE)
    } else {
        prev
    };

    let page_range = (tp - left_most_page).min(WINDOW_SIZE).max(0);

    PageWindow {
        total_pages: pages,
        page,
        left_most_page,
        page_range,
    }
}
