//! API Module
//!
//! HTTP handler and routing for the search proxy.
//!
//! # Endpoints
//! - `GET /:search_term` - Look a term up, localized by `Accept-Language`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
