//! Catalogue Invariant Tests
//!
//! Tests for:
//! - Uniqueness of (title, director) across create/update sequences
//! - Id affixes stable per title, full id varying
//! - Create/get round trip
//! - Delete removes exactly one movie
//! - Validation order
//! - Seed data, duplicate rejection, not-found delete, id-preserving update
//! - Serialized check-then-act under concurrent writers

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use marquee::catalogue::id::{id_prefix, id_suffix};
use marquee::catalogue::{
    generate_id, CatalogueError, Director, Movie, MovieField, MovieRequest, MovieStore,
};

// =============================================================================
// Test Utilities
// =============================================================================

fn request(title: &str, firstname: &str, lastname: &str) -> MovieRequest {
    MovieRequest::new(title, "tt0000000", Director::new(firstname, lastname))
}

fn assert_unique_triples(movies: &[Movie]) {
    let triples: HashSet<_> = movies
        .iter()
        .map(|m| {
            (
                m.title.clone(),
                m.director.firstname.clone(),
                m.director.lastname.clone(),
            )
        })
        .collect();
    assert_eq!(triples.len(), movies.len(), "duplicate movie in {:?}", movies);
}

fn assert_unique_ids(movies: &[Movie]) {
    let ids: HashSet<_> = movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), movies.len());
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_uniqueness_holds_across_creates_and_updates() {
    let store = MovieStore::new();

    let attempts = [
        request("Heat", "Michael", "Mann"),
        request("Heat", "Michael", "Mann"),
        request("Heat", "Someone", "Else"),
        request("Inception", "Christopher", "Nolan"),
        request("Memento", "Christopher", "Nolan"),
        request("Memento", "Christopher", "Nolan"),
    ];
    for attempt in attempts {
        let _ = store.create(attempt);
    }

    let ids: Vec<_> = store.list().into_iter().map(|m| m.id).collect();
    for (i, id) in ids.iter().enumerate() {
        let target = match i % 3 {
            0 => request("Heat", "Michael", "Mann"),
            1 => request("The Matrix", "Lana", "Wachowski"),
            _ => request(&format!("Sequel {}", i), "Jane", "Doe"),
        };
        let _ = store.update(id, target);
    }

    let movies = store.list();
    assert_eq!(movies.len(), 7);
    assert_unique_triples(&movies);
    assert_unique_ids(&movies);
}

#[test]
fn test_concurrent_duplicate_creates_admit_exactly_one() {
    let store = Arc::new(MovieStore::empty());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.create(request("Heat", "Michael", "Mann")).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_concurrent_mixed_writers_keep_invariants() {
    let store = Arc::new(MovieStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..25 {
                    let title = format!("Film {}", i % 10);
                    let created = store.create(request(&title, "Director", &t.to_string()));
                    if let Ok(movie) = created {
                        if i % 4 == 0 {
                            let _ = store.delete(&movie.id);
                        } else if i % 4 == 1 {
                            let _ = store.update(&movie.id, request(&title, "Shared", "Name"));
                        }
                    }
                    let _ = store.list();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let movies = store.list();
    assert_unique_triples(&movies);
    assert_unique_ids(&movies);
    for movie in &movies {
        assert!(!movie.id.is_empty());
        assert!(!movie.title.trim().is_empty());
        assert!(!movie.director.firstname.trim().is_empty());
        assert!(!movie.director.lastname.trim().is_empty());
    }
}

// =============================================================================
// Identifier Generation
// =============================================================================

#[test]
fn test_id_affixes_stable_and_id_varies() {
    let title = "Inception";
    let prefix = id_prefix(title);
    let suffix = id_suffix(title);

    let ids: Vec<_> = (0..50).map(|_| generate_id(title)).collect();

    for id in &ids {
        assert_eq!(&id[..6], prefix);
        assert_eq!(&id[id.len() - 6..], suffix);
        assert!(id.len() == 13 || id.len() == 14);
    }

    // 50 draws from 100 salts all agreeing has probability 100^-49
    let distinct: HashSet<_> = ids.iter().collect();
    assert!(distinct.len() > 1);
}

// =============================================================================
// Round Trip and Delete
// =============================================================================

#[test]
fn test_create_then_get_round_trip() {
    let store = MovieStore::new();
    let created = store
        .create(MovieRequest::new(
            "Heat",
            "tt0113277",
            Director::new("Michael", "Mann"),
        ))
        .unwrap();

    let fetched = store.get(&created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.imdb_id, "tt0113277");
    assert_eq!(fetched.director, Director::new("Michael", "Mann"));
}

#[test]
fn test_delete_removes_exactly_one() {
    let store = MovieStore::new();
    let before = store.list();
    let victim = before[2].id.clone();

    let title = store.delete(&victim).unwrap();
    assert_eq!(title, "The Dark Knight");

    assert_eq!(store.len(), before.len() - 1);
    assert_eq!(store.get(&victim), Err(CatalogueError::NotFound));
    for movie in before.iter().filter(|m| m.id != victim) {
        assert_eq!(&store.get(&movie.id).unwrap(), movie);
    }
}

// =============================================================================
// Validation Order
// =============================================================================

#[test]
fn test_title_reported_before_imdb_id() {
    let store = MovieStore::new();
    let result = store.create(MovieRequest::new("", "", Director::new("A", "B")));

    assert_eq!(
        result,
        Err(CatalogueError::Validation {
            field: MovieField::Title
        })
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_seed_data() {
    let movies = MovieStore::new().list();

    assert_eq!(movies.len(), 4);
    assert!(movies
        .iter()
        .any(|m| m.title == "Inception" && m.director == Director::new("Christopher", "Nolan")));
}

#[test]
fn test_duplicate_rejection_against_seed() {
    let store = MovieStore::new();
    let result = store.create(MovieRequest::new(
        "Inception",
        "x",
        Director::new("Christopher", "Nolan"),
    ));

    assert_eq!(result, Err(CatalogueError::Duplicate));
}

#[test]
fn test_not_found_delete_leaves_list_unchanged() {
    let store = MovieStore::new();
    let before = store.list();

    assert_eq!(store.delete("nonexistent-id"), Err(CatalogueError::NotFound));
    assert_eq!(store.list(), before);
}

#[test]
fn test_update_preserves_id() {
    let store = MovieStore::new();
    let original = store.list()[0].clone();
    let fields = MovieRequest::new("Tenet", "tt6723592", Director::new("Christopher", "Nolan"));

    let updated = store.update(&original.id, fields.clone()).unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, fields.title);
    assert_eq!(updated.imdb_id, fields.imdb_id);
    assert_eq!(updated.director, fields.director);
}

/// Updating a movie with its own title and director collides with itself.
#[test]
fn test_update_with_unchanged_identity_is_rejected() {
    let store = MovieStore::new();
    let original = store.list()[0].clone();

    let result = store.update(
        &original.id,
        MovieRequest::new(original.title.clone(), "tt-other", original.director.clone()),
    );

    assert_eq!(result, Err(CatalogueError::Duplicate));
}
