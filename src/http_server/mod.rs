//! # HTTP Server Module
//!
//! JSON-over-HTTP transport for the movie catalogue. Decodes requests,
//! calls into [`crate::catalogue::MovieStore`] and maps its typed failures
//! to status codes.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting
//! - `GET /health` - Health check
//! - `GET /movies` - List movies
//! - `POST /movie` - Create a movie
//! - `GET|PUT|DELETE /movie/:id` - Fetch, replace or remove a movie
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod errors;
pub mod movie_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use movie_routes::CatalogueState;
pub use server::{build_router, HttpServer};
