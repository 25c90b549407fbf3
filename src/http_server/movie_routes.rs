//! Movie HTTP Routes
//!
//! CRUD endpoints over the catalogue store.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use crate::catalogue::{Movie, MovieRequest, MovieStore};
use crate::observability::{Event, Logger, MetricsRegistry};

// ==================
// Shared State
// ==================

/// Catalogue state shared across handlers
pub struct CatalogueState {
    pub store: MovieStore,
    pub metrics: MetricsRegistry,
}

impl CatalogueState {
    /// State over the seeded catalogue
    pub fn new() -> Self {
        Self::with_store(MovieStore::new())
    }

    pub fn with_store(store: MovieStore) -> Self {
        Self {
            store,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Record a failed request before it is returned to the client
    fn reject(&self, operation: &str, err: impl Into<ApiError>) -> ApiError {
        let err = err.into();
        self.metrics.increment_rejected();
        let message = err.to_string();
        Logger::warn(
            Event::RequestRejected,
            &[
                ("operation", operation),
                ("reason", err.kind()),
                ("message", message.as_str()),
            ],
        );
        err
    }
}

impl Default for CatalogueState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Movie Routes
// ==================

/// Create movie routes
pub fn movie_routes(state: Arc<CatalogueState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/movies", get(list_movies_handler))
        .route("/movie", post(create_movie_handler))
        .route(
            "/movie/:id",
            get(get_movie_handler)
                .put(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn root_handler() -> &'static str {
    "Hello World"
}

async fn list_movies_handler(State(state): State<Arc<CatalogueState>>) -> Json<Vec<Movie>> {
    state.metrics.increment_reads();
    Json(state.store.list())
}

async fn get_movie_handler(
    State(state): State<Arc<CatalogueState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    state.metrics.increment_reads();
    let movie = state.store.get(&id).map_err(|e| state.reject("get", e))?;
    Ok(Json(movie))
}

async fn create_movie_handler(
    State(state): State<Arc<CatalogueState>>,
    body: Result<Json<MovieRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let Json(request) = body.map_err(|_| state.reject("create", ApiError::InvalidBody))?;

    let movie = state
        .store
        .create(request)
        .map_err(|e| state.reject("create", e))?;

    state.metrics.increment_created();
    Logger::info(
        Event::MovieCreated,
        &[("id", movie.id.as_str()), ("title", movie.title.as_str())],
    );

    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie_handler(
    State(state): State<Arc<CatalogueState>>,
    Path(id): Path<String>,
    body: Result<Json<MovieRequest>, JsonRejection>,
) -> ApiResult<Json<Movie>> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(_) => {
            // Unknown ids are reported before undecodable bodies
            state.store.get(&id).map_err(|e| state.reject("update", e))?;
            return Err(state.reject("update", ApiError::InvalidBody));
        }
    };

    let movie = state
        .store
        .update(&id, request)
        .map_err(|e| state.reject("update", e))?;

    state.metrics.increment_updated();
    Logger::info(
        Event::MovieUpdated,
        &[("id", movie.id.as_str()), ("title", movie.title.as_str())],
    );

    Ok(Json(movie))
}

async fn delete_movie_handler(
    State(state): State<Arc<CatalogueState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let title = state
        .store
        .delete(&id)
        .map_err(|e| state.reject("delete", e))?;

    state.metrics.increment_deleted();
    Logger::info(Event::MovieDeleted, &[("id", id.as_str()), ("title", title.as_str())]);

    Ok(Json(MessageResponse {
        message: format!("Successfully deleted movie: {}", title),
    }))
}
