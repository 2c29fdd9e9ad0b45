//! Entry-level and sense-level admissibility.
//!
//! `EntryFilter` is a pure predicate over already-loaded entries; it raises
//! no errors. Entry rules run first and short-circuit, then the surviving
//! entry's senses are filtered individually and the entry is dropped if none
//! remain.

use crate::entry::Entry;
use crate::policy::ExclusionSets;
use regex::Regex;

// Initialisms are often not tagged as such in the dataset, so any word
// shaped like an all-caps run (with an optional trailing 's' making it
// plural) is assumed to be an abbreviation.
const ABBREVIATION_PATTERN: &str = r"^[A-Z][A-Z0-9&]+s?";

/// Admissibility rules for one run.
#[derive(Debug)]
pub struct EntryFilter {
    char_max: usize,
    allow_phrases: bool,
    allow_abbreviations: bool,
    exclusions: ExclusionSets,
    abbreviation: Regex,
}

impl EntryFilter {
    pub fn new(
        char_max: usize,
        allow_phrases: bool,
        allow_abbreviations: bool,
        exclusions: ExclusionSets,
    ) -> Self {
        Self {
            char_max,
            allow_phrases,
            allow_abbreviations,
            exclusions,
            // The pattern is a constant, compilation cannot fail.
            abbreviation: Regex::new(ABBREVIATION_PATTERN).expect("valid abbreviation pattern"),
        }
    }

    /// Entry-level admissibility. Rules are checked in order and the first
    /// failure rejects.
    pub fn is_admissible(&self, entry: &Entry) -> bool {
        if entry.word.chars().count() > self.char_max {
            return false;
        }
        // The hyphen check is intentionally not gated by the phrases flag:
        // hyphenated words are rejected even when phrases are allowed.
        if !self.allow_phrases && entry.word.contains(' ') || entry.word.contains('-') {
            return false;
        }
        if !entry.categories.is_disjoint(&self.exclusions.categories) {
            return false;
        }
        if !self.allow_abbreviations && self.abbreviation.is_match(&entry.word) {
            return false;
        }
        true
    }

    /// Build the admissible pool: apply [`Self::is_admissible`], then drop
    /// every sense whose categories or tags intersect the exclusion sets,
    /// then drop entries left with no senses.
    pub fn admissible_pool(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries
            .into_iter()
            .filter(|e| self.is_admissible(e))
            .filter_map(|mut entry| {
                entry.senses.retain(|sense| {
                    sense.categories.is_disjoint(&self.exclusions.categories)
                        && sense.tags.is_disjoint(&self.exclusions.tags)
                });
                if entry.senses.is_empty() {
                    None
                } else {
                    Some(entry)
                }
            })
            .collect()
    }
}
