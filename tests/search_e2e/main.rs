//! Search E2E test suite.
//!
//! Drives the real HTTP handlers against an in-process mock of the external
//! search service's REST surface.
//!
//! Run with: cargo test --test search_e2e

mod test_helpers;

mod test_errors;
mod test_suggest_autocomplete;
