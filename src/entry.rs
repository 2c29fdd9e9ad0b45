//! In-memory representation of one dictionary record and its senses.
//!
//! The dataset carries far more fields than the generator needs; everything
//! not listed here is ignored on load. `categories` and `tags` are kept as
//! ordered sets so rendered annotation lists come out in a stable order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One meaning of a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Opaque identifier of the dictionary block this sense belongs to.
    /// Only compared for equality, never ordered.
    pub id: String,
    /// Category labels scoped to this sense.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    /// Usage and register tags, e.g. "archaic", "offensive".
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// Definition strings, in their original order.
    pub glosses: Vec<String>,
}

/// One dictionary headword occurrence.
///
/// A single written word usually appears as several entries (noun block,
/// verb block, differing etymologies); see [`crate::merge`] for how those
/// are consolidated at report time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Surface text form.
    pub word: String,
    /// Entry-level category labels, e.g. "English surnames".
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    /// Ordered senses. An entry in the admissible pool always has at
    /// least one.
    pub senses: Vec<Sense>,
}

impl Entry {
    /// Block discriminator: the id of the first sense, if any.
    pub fn first_sense_id(&self) -> Option<&str> {
        self.senses.first().map(|s| s.id.as_str())
    }
}
