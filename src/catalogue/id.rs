//! # Movie Identifiers
//!
//! Ids are the first 6 and last 6 hex characters of the SHA-256 of the
//! title, joined by a random decimal in `[0, 100)`:
//!
//! ```text
//! sha256("Inception") = 524209...a8d403
//! id                  = "524209" + "26" + "a8d403" = "52420926a8d403"
//! ```
//!
//! The affixes are stable per title, the middle segment is not, so two
//! calls with the same title usually yield different ids. Ids are neither
//! deterministic nor sortable.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of hex characters taken from each end of the digest
const AFFIX_LEN: usize = 6;

/// Upper bound (exclusive) of the random middle segment
pub const SALT_BOUND: u32 = 100;

/// Generate an id for a new movie using the thread-local random source
pub fn generate_id(title: &str) -> String {
    generate_id_with(title, &mut rand::thread_rng())
}

/// Generate an id drawing the middle segment from `rng`
pub fn generate_id_with<R: Rng + ?Sized>(title: &str, rng: &mut R) -> String {
    id_with_salt(title, rng.gen_range(0..SALT_BOUND))
}

/// Build the id for `title` with a fixed middle segment
///
/// `salt` must be below [`SALT_BOUND`].
pub fn id_with_salt(title: &str, salt: u32) -> String {
    let digest = title_digest(title);

    format!(
        "{}{}{}",
        &digest[..AFFIX_LEN],
        salt,
        &digest[digest.len() - AFFIX_LEN..]
    )
}

/// Stable leading hex characters of every id generated for `title`
pub fn id_prefix(title: &str) -> String {
    title_digest(title)[..AFFIX_LEN].to_string()
}

/// Stable trailing hex characters of every id generated for `title`
pub fn id_suffix(title: &str) -> String {
    let digest = title_digest(title);
    digest[digest.len() - AFFIX_LEN..].to_string()
}

fn title_digest(title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_id_shape() {
        let id = generate_id("Inception");
        assert!(id.len() == 13 || id.len() == 14, "unexpected length: {}", id);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_affixes_come_from_sha256() {
        // sha256("abc") = ba7816bf...f20015ad
        assert_eq!(id_prefix("abc"), "ba7816");
        assert_eq!(id_suffix("abc"), "0015ad");
    }

    #[test]
    fn test_id_layout() {
        let id = generate_id("The Matrix");
        let prefix = id_prefix("The Matrix");
        let suffix = id_suffix("The Matrix");

        assert!(id.starts_with(&prefix));
        assert!(id.ends_with(&suffix));

        let middle = &id[prefix.len()..id.len() - suffix.len()];
        let salt: u32 = middle.parse().unwrap();
        assert!(salt < 100);
        // No zero padding
        assert_eq!(middle, salt.to_string());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        assert_eq!(
            generate_id_with("Heat", &mut a),
            generate_id_with("Heat", &mut b)
        );
    }

    #[test]
    fn test_id_with_salt_matches_seed() {
        assert_eq!(id_with_salt("Inception", 26), "52420926a8d403");
        assert_eq!(id_with_salt("Inception", 0), "5242090a8d403");
    }

    #[test]
    fn test_different_titles_have_different_affixes() {
        assert_ne!(id_prefix("Inception"), id_prefix("Memento"));
    }
}
