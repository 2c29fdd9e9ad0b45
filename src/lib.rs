//! Passphrase generation from bulk dictionary data.
//!
//! The pipeline: load one JSON record per line into [`Entry`] values, build
//! the active [`ExclusionSets`] from the inclusion toggles, reduce the
//! entries to an admissible pool with [`EntryFilter`], draw words uniformly
//! with replacement, consolidate homographs of each chosen word, and render
//! a vetting report per passphrase option.

pub mod entry;
pub mod error;
pub mod filter;
pub mod io_utils;
pub mod loader;
pub mod merge;
pub mod policy;
pub mod report;
pub mod sample;

pub use entry::{Entry, Sense};
pub use error::PasslexError;
pub use filter::EntryFilter;
pub use loader::load_entries;
pub use merge::merge_homographs;
pub use policy::{ExclusionSets, InclusionRule, INCLUSION_RULES};
pub use report::render_option;
pub use sample::sample_passphrase;
