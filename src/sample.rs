//! Uniform selection over the admissible pool.
//!
//! Sampling is with replacement: every slot of every option is an
//! independent uniform draw, so the same entry may appear twice even within
//! one passphrase. No seeding contract; this is an interactive tool, not a
//! reproducible-build component.

use crate::entry::Entry;
use crate::error::PasslexError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `word_count` entries uniformly, with replacement, from `pool`.
pub fn sample_passphrase<'a, R: Rng>(
    rng: &mut R,
    pool: &'a [Entry],
    word_count: usize,
) -> Result<Vec<&'a Entry>, PasslexError> {
    if pool.is_empty() {
        return Err(PasslexError::EmptyPool);
    }
    Ok((0..word_count)
        .map(|_| pool.choose(rng).expect("pool checked non-empty"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Sense;
    use std::collections::BTreeSet;

    fn entry(word: &str) -> Entry {
        Entry {
            word: word.to_string(),
            categories: BTreeSet::new(),
            senses: vec![Sense {
                id: format!("{word}-1"),
                categories: BTreeSet::new(),
                tags: BTreeSet::new(),
                glosses: vec!["g".to_string()],
            }],
        }
    }

    #[test]
    fn empty_pool_is_reported_not_panicked() {
        let mut rng = rand::thread_rng();
        assert!(matches!(
            sample_passphrase(&mut rng, &[], 4),
            Err(PasslexError::EmptyPool)
        ));
    }

    #[test]
    fn replacement_allows_duplicates_from_a_singleton_pool() {
        let pool = vec![entry("only")];
        let mut rng = rand::thread_rng();
        let chosen = sample_passphrase(&mut rng, &pool, 4).unwrap();
        assert_eq!(chosen.len(), 4);
        assert!(chosen.iter().all(|e| e.word == "only"));
    }
}
