//! Declarative exclusion policy.
//!
//! Ten named word classes are excluded by default; each can be let back in
//! with its toggle. A rule that is *not* enabled contributes its entry-level
//! categories and sense-level tags to the active exclusion sets. Rules are
//! independent of one another and the table is never mutated at runtime.

use std::collections::BTreeSet;

/// One row of the inclusion table.
#[derive(Debug, Clone, Copy)]
pub struct InclusionRule {
    /// Toggle name as exposed on the command line.
    pub name: &'static str,
    /// Entry-level categories identifying this word class.
    pub categories: &'static [&'static str],
    /// Sense-level tags identifying this word class.
    pub tags: &'static [&'static str],
}

/// The fixed inclusion table. Order matches the CLI help output.
pub const INCLUSION_RULES: &[InclusionRule] = &[
    InclusionRule {
        name: "abbreviations",
        categories: &[],
        tags: &["abbreviation"],
    },
    InclusionRule {
        name: "alternative-forms",
        categories: &[],
        tags: &["alternative"],
    },
    InclusionRule {
        name: "given-names",
        categories: &["English given names"],
        tags: &[],
    },
    InclusionRule {
        name: "morphemes",
        categories: &[],
        tags: &["morpheme"],
    },
    InclusionRule {
        name: "names",
        categories: &[
            "English diminutives of female given names",
            "English diminutives of male given names",
            "English diminutives of unisex given names",
        ],
        tags: &["name"],
    },
    InclusionRule {
        name: "nonstandard",
        categories: &[],
        tags: &["nonstandard"],
    },
    InclusionRule {
        name: "old",
        categories: &[],
        tags: &["archaic", "obsolete"],
    },
    InclusionRule {
        name: "phrases",
        categories: &["English multiword terms"],
        tags: &[],
    },
    InclusionRule {
        name: "profanity",
        categories: &["English swear words"],
        tags: &["derogatory", "offensive", "slur", "vulgar"],
    },
    InclusionRule {
        name: "surnames",
        categories: &["English surnames"],
        tags: &[],
    },
];

/// Active exclusion sets derived from the table plus caller input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSets {
    /// Entry- and sense-level categories to exclude.
    pub categories: BTreeSet<String>,
    /// Sense-level tags to exclude.
    pub tags: BTreeSet<String>,
}

impl ExclusionSets {
    /// Build the exclusion sets for one run.
    ///
    /// `enabled` holds the toggle names the caller explicitly switched on;
    /// every rule whose name is absent contributes its categories and tags.
    /// `extra_categories` and `extra_tags` are unioned in unconditionally,
    /// as is the `misspelling` tag.
    pub fn build<S: AsRef<str>>(
        enabled: &BTreeSet<String>,
        extra_categories: &[S],
        extra_tags: &[S],
    ) -> Self {
        let mut sets = ExclusionSets {
            categories: extra_categories
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            tags: extra_tags.iter().map(|s| s.as_ref().to_string()).collect(),
        };
        sets.tags.insert("misspelling".to_string());
        for rule in INCLUSION_RULES {
            if enabled.contains(rule.name) {
                continue;
            }
            sets.categories
                .extend(rule.categories.iter().map(|c| c.to_string()));
            sets.tags.extend(rule.tags.iter().map(|t| t.to_string()));
        }
        sets
    }
}
