//! Homograph consolidation for reporting.
//!
//! A headword frequently has several independent dictionary blocks (noun vs.
//! verb, differing etymologies). The dataset has no block field, so the id
//! of the first sense stands in as the block discriminator: a pool entry
//! with the same written word but a different first-sense id is a different
//! block and gets folded into the report.

use crate::entry::Entry;

/// Return a reporting copy of `chosen` with the categories and senses of
/// every other-block homograph in `pool` folded in, in pool iteration order.
///
/// The pool is never mutated; repeated selections of the same word within a
/// run each start from the pristine pool entry.
pub fn merge_homographs(chosen: &Entry, pool: &[Entry]) -> Entry {
    let mut merged = chosen.clone();
    let block_id = match chosen.first_sense_id() {
        Some(id) => id,
        None => return merged,
    };
    for other in pool {
        if other.word != chosen.word {
            continue;
        }
        match other.first_sense_id() {
            // Same first-sense id means same block, including the chosen
            // entry itself.
            Some(id) if id != block_id => {
                merged.categories.extend(other.categories.iter().cloned());
                merged.senses.extend(other.senses.iter().cloned());
            }
            _ => {}
        }
    }
    merged
}
