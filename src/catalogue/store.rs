//! # Catalogue Store
//!
//! Owns the movie collection. Every operation runs inside a single critical
//! section of one `RwLock`: reads share the lock, and create, update and
//! delete hold it exclusively across their duplicate-check and mutate steps
//! so concurrent writers can never interleave.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{CatalogueError, CatalogueResult};
use rand::seq::SliceRandom;

use super::id::{id_with_salt, SALT_BOUND};
use super::movie::{seed_movies, Movie, MovieRequest};

#[derive(Debug, Default)]
struct Catalogue {
    /// Insertion order
    movies: Vec<Movie>,
}

impl Catalogue {
    fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    fn contains_match(&self, request: &MovieRequest) -> bool {
        self.movies.iter().any(|m| m.matches(request))
    }

    /// Pick an id for `title` not held by any stored movie
    ///
    /// Salts are tried in random order, so the first candidate is a plain
    /// random draw and every free salt is reached before giving up.
    fn fresh_id(&self, title: &str) -> Option<String> {
        let mut salts: Vec<u32> = (0..SALT_BOUND).collect();
        salts.shuffle(&mut rand::thread_rng());

        salts
            .into_iter()
            .map(|salt| id_with_salt(title, salt))
            .find(|id| self.position(id).is_none())
    }
}

/// In-memory movie catalogue
///
/// Share it behind an `Arc`; callers only ever receive clones of stored
/// movies.
#[derive(Debug)]
pub struct MovieStore {
    inner: RwLock<Catalogue>,
}

impl MovieStore {
    /// Create a store holding the four seed movies
    pub fn new() -> Self {
        Self::with_movies(seed_movies())
    }

    /// Create a store with no movies
    pub fn empty() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Create a store holding `movies` in the given order
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            inner: RwLock::new(Catalogue::from_movies(movies)),
        }
    }

    // No critical section can panic halfway through a mutation, so a
    // poisoned lock still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Catalogue> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalogue> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All movies in collection order
    pub fn list(&self) -> Vec<Movie> {
        self.read().movies.clone()
    }

    /// Number of stored movies
    pub fn len(&self) -> usize {
        self.read().movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().movies.is_empty()
    }

    /// Fetch a movie by id
    pub fn get(&self, id: &str) -> CatalogueResult<Movie> {
        self.read()
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(CatalogueError::NotFound)
    }

    /// Validate `request`, reject duplicates, then append a movie with a
    /// freshly generated id
    ///
    /// Fails with `IdSpaceExhausted` when every id for the title is held by
    /// a stored movie.
    pub fn create(&self, request: MovieRequest) -> CatalogueResult<Movie> {
        // Validation reads only the request, so it needs no lock
        request.validate()?;

        let mut catalogue = self.write();

        if catalogue.contains_match(&request) {
            return Err(CatalogueError::Duplicate);
        }

        let id = catalogue
            .fresh_id(&request.title)
            .ok_or(CatalogueError::IdSpaceExhausted)?;

        let movie = Movie::from_request(id, &request);
        catalogue.movies.push(movie.clone());

        Ok(movie)
    }

    /// Replace every field of the movie `id` except the id itself
    ///
    /// The duplicate check runs before validation and covers the whole
    /// collection, including the movie being updated. Resubmitting a movie's
    /// current title and director is therefore rejected as a duplicate.
    pub fn update(&self, id: &str, request: MovieRequest) -> CatalogueResult<Movie> {
        let mut catalogue = self.write();

        let idx = catalogue.position(id).ok_or(CatalogueError::NotFound)?;

        if catalogue.contains_match(&request) {
            return Err(CatalogueError::Duplicate);
        }

        request.validate()?;

        let movie = Movie::from_request(id.to_string(), &request);
        catalogue.movies[idx] = movie.clone();

        Ok(movie)
    }

    /// Remove the movie `id`, returning its title
    pub fn delete(&self, id: &str) -> CatalogueResult<String> {
        let mut catalogue = self.write();

        let idx = catalogue.position(id).ok_or(CatalogueError::NotFound)?;

        // Vec::remove shifts the tail left, keeping relative order
        Ok(catalogue.movies.remove(idx).title)
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
