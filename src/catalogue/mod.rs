//! # Movie Catalogue
//!
//! The record-management core of marquee: identifier generation, request
//! validation, duplicate detection and the CRUD operations over the
//! in-memory collection.
//!
//! ## Invariants
//! - Every stored movie has a non-empty id, title, director first name and
//!   director last name
//! - No two stored movies share (title, director.firstname, director.lastname)
//! - Ids are unique among stored movies
//! - Collection order is insertion order; deletion closes the gap
//!
//! The catalogue knows nothing about HTTP. Failures are returned as
//! [`CatalogueError`] and mapped to responses by the transport layer.

pub mod errors;
pub mod id;
pub mod movie;
pub mod store;

pub use errors::{CatalogueError, CatalogueResult, MovieField};
pub use id::{generate_id, generate_id_with};
pub use movie::{Director, Movie, MovieRequest};
pub use store::MovieStore;
