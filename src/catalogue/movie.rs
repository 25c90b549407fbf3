//! # Movie Records

use serde::{Deserialize, Serialize};

use super::errors::{CatalogueError, CatalogueResult, MovieField};

/// Director of a movie
///
/// Embedded by value in every [`Movie`]; it has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A catalogued movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Generated on creation, never changed afterwards
    pub id: String,
    /// External reference code, not format-checked
    pub imdb_id: String,
    pub title: String,
    pub director: Director,
}

impl Movie {
    /// Build a stored movie from a validated request
    pub(crate) fn from_request(id: String, request: &MovieRequest) -> Self {
        Self {
            id,
            imdb_id: request.imdb_id.clone(),
            title: request.title.clone(),
            director: request.director.clone(),
        }
    }

    /// True if this movie has the same title and director as `request`
    pub fn matches(&self, request: &MovieRequest) -> bool {
        self.title == request.title
            && self.director.firstname == request.director.firstname
            && self.director.lastname == request.director.lastname
    }
}

/// Client-supplied fields for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub imdb_id: String,
    #[serde(default)]
    pub director: Director,
}

impl MovieRequest {
    pub fn new(title: impl Into<String>, imdb_id: impl Into<String>, director: Director) -> Self {
        Self {
            title: title.into(),
            imdb_id: imdb_id.into(),
            director,
        }
    }

    /// Check field presence
    ///
    /// Fields are checked in a fixed order (title, imdb_id, director first
    /// name, director last name) and only the first empty one is reported.
    pub fn validate(&self) -> CatalogueResult<()> {
        let fields = [
            (MovieField::Title, &self.title),
            (MovieField::ImdbId, &self.imdb_id),
            (MovieField::DirectorFirstname, &self.director.firstname),
            (MovieField::DirectorLastname, &self.director.lastname),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(CatalogueError::Validation { field });
            }
        }

        Ok(())
    }
}

/// Records present when the catalogue starts
pub fn seed_movies() -> Vec<Movie> {
    [
        ("52420926a8d403", "tt1375666", "Inception", "Christopher", "Nolan"),
        ("3fd26c41ae733f", "tt0133093", "The Matrix", "Lana", "Wachowski"),
        ("9074185900698c", "tt0468569", "The Dark Knight", "Christopher", "Nolan"),
        ("e2fccb318304cf", "tt1285016", "The Social Network", "David", "Fincher"),
    ]
    .into_iter()
    .map(|(id, imdb_id, title, firstname, lastname)| Movie {
        id: id.to_string(),
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        director: Director::new(firstname, lastname),
    })
    .collect()
}
