//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod search;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use search::configure_search_routes;
