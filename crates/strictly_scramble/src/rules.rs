//! Word rules for word scramble.
//!
//! Pure functions with no knowledge of sessions or dictionaries.

use tracing::instrument;

/// Lowercases `raw` and strips surrounding whitespace, newlines included.
#[instrument]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in `word`, counted in characters rather than bytes.
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Checks whether `candidate` can be spelled from `root`'s letters.
///
/// Each letter of `root` may be used at most once, letters need not all be
/// used, and order does not matter: a multiset subset test.
#[instrument]
pub fn is_derivable(candidate: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}
