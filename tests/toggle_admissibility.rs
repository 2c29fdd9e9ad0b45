use passlex::{Entry, EntryFilter, ExclusionSets, Sense};
use std::collections::BTreeSet;

fn entry(word: &str, categories: &[&str], tags: &[&str]) -> Entry {
    Entry {
        word: word.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        senses: vec![Sense {
            id: format!("{word}-1"),
            categories: BTreeSet::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            glosses: vec!["test".to_string()],
        }],
    }
}

fn pool_with(enabled: &[&str], entries: Vec<Entry>) -> Vec<Entry> {
    let enabled: BTreeSet<String> = enabled.iter().map(|s| s.to_string()).collect();
    let exclusions = ExclusionSets::build::<&str>(&enabled, &[], &[]);
    let filter = EntryFilter::new(
        16,
        enabled.contains("phrases"),
        enabled.contains("abbreviations"),
        exclusions,
    );
    filter.admissible_pool(entries)
}

#[test]
fn profanity_toggle_controls_swear_word_admissibility() {
    let swear = entry("bleep", &["English swear words"], &[]);
    assert!(pool_with(&[], vec![swear.clone()]).is_empty());
    assert_eq!(pool_with(&["profanity"], vec![swear]).len(), 1);
}

#[test]
fn vulgar_tagged_sense_needs_the_profanity_toggle() {
    let vulgar = entry("crude", &[], &["vulgar"]);
    assert!(pool_with(&[], vec![vulgar.clone()]).is_empty());
    assert_eq!(pool_with(&["profanity"], vec![vulgar]).len(), 1);
}

#[test]
fn surname_toggle_is_independent_of_the_others() {
    let surname = entry("Miller", &["English surnames"], &[]);
    // Enabling an unrelated toggle does not let surnames through.
    assert!(pool_with(&["profanity"], vec![surname.clone()]).is_empty());
    assert_eq!(pool_with(&["surnames"], vec![surname]).len(), 1);
}

#[test]
fn misspelling_is_excluded_under_every_toggle() {
    let all: Vec<&str> = passlex::INCLUSION_RULES.iter().map(|r| r.name).collect();
    let typo = entry("teh", &[], &["misspelling"]);
    assert!(pool_with(&all, vec![typo]).is_empty());
}

#[test]
fn abbreviation_scenario_from_unmarked_initialism() {
    // {"word":"ABC", ...} with no categories or tags is caught purely by
    // the all-caps heuristic.
    let abc = entry("ABC", &[], &[]);
    assert!(pool_with(&[], vec![abc.clone()]).is_empty());
    assert_eq!(pool_with(&["abbreviations"], vec![abc]).len(), 1);
}

#[test]
fn phrase_scenario_space_gated_hyphen_not() {
    let spaced = entry("multi word", &[], &[]);
    let hyphened = entry("multi-word", &[], &[]);
    assert!(pool_with(&[], vec![spaced.clone()]).is_empty());
    assert_eq!(pool_with(&["phrases"], vec![spaced]).len(), 1);
    assert!(pool_with(&[], vec![hyphened.clone()]).is_empty());
    assert!(pool_with(&["phrases"], vec![hyphened]).is_empty());
}

#[test]
fn mixed_senses_keep_only_the_admissible_ones() {
    let mut word = entry("quick", &[], &[]);
    word.senses.push(Sense {
        id: "quick-2".to_string(),
        categories: BTreeSet::new(),
        tags: ["archaic".to_string()].into(),
        glosses: vec!["alive".to_string()],
    });
    let pool = pool_with(&[], vec![word]);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].senses.len(), 1);
    assert_eq!(pool[0].senses[0].id, "quick-1");
}
