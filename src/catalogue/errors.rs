//! # Catalogue Errors

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type for catalogue operations
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Client-supplied fields checked for presence, in validation order
///
/// Serializes as the field's dotted key in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MovieField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "imdb_id")]
    ImdbId,
    #[serde(rename = "director.firstname")]
    DirectorFirstname,
    #[serde(rename = "director.lastname")]
    DirectorLastname,
}

impl MovieField {
    /// Name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            MovieField::Title => "Title",
            MovieField::ImdbId => "Imdb_id",
            MovieField::DirectorFirstname => "Firstname",
            MovieField::DirectorLastname => "Lastname",
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Catalogue errors
///
/// All kinds are recoverable and returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// A required field is empty after trimming whitespace
    #[error("{field} cannot be empty")]
    Validation { field: MovieField },

    /// A movie with the same title and director already exists
    #[error("Movie with this Name already exists")]
    Duplicate,

    /// No movie carries the requested id
    #[error("Movie not found")]
    NotFound,

    /// Every id derivable from the title belongs to a stored movie
    #[error("No free id left for this title")]
    IdSpaceExhausted,
}

impl CatalogueError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogueError::Validation { .. } => 400,
            CatalogueError::Duplicate => 400,
            CatalogueError::NotFound => 404,
            CatalogueError::IdSpaceExhausted => 409,
        }
    }

    /// Short machine-readable kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogueError::Validation { .. } => "validation",
            CatalogueError::Duplicate => "duplicate",
            CatalogueError::NotFound => "not_found",
            CatalogueError::IdSpaceExhausted => "id_space_exhausted",
        }
    }
}
