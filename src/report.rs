//! Human-readable passphrase reports.
//!
//! One block per passphrase option: the passphrase itself, then each word
//! with its merged categories and a numbered list of senses and glosses so
//! the user can spot words they would rather not type every day.

use crate::entry::{Entry, Sense};
use std::collections::BTreeSet;
use std::io::{self, Write};

fn annotation(label: &str, set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        String::new()
    } else {
        let items: Vec<&str> = set.iter().map(String::as_str).collect();
        format!(" ({label}: {})", items.join(", "))
    }
}

fn write_sense<W: Write>(out: &mut W, index: usize, sense: &Sense) -> io::Result<()> {
    let cats = annotation("categories", &sense.categories);
    let tags = annotation("tags", &sense.tags);
    if let [gloss] = sense.glosses.as_slice() {
        writeln!(out, "\t{index}. {gloss}{cats}{tags}")?;
    } else {
        writeln!(out, "\t{index}.{cats}{tags}")?;
        for (sub, gloss) in sense.glosses.iter().enumerate() {
            writeln!(out, "\t\t{sub}. {gloss}")?;
        }
    }
    Ok(())
}

/// Render one passphrase option. `words` are the chosen entries after
/// homograph merging, in passphrase order.
pub fn render_option<W: Write>(out: &mut W, index: usize, words: &[Entry]) -> io::Result<()> {
    writeln!(out, "=== OPTION {index} ===\n")?;
    let phrase: Vec<&str> = words.iter().map(|e| e.word.as_str()).collect();
    writeln!(out, "{}", phrase.join(" "))?;

    for word in words {
        writeln!(out, "{}{}", word.word, annotation("categories", &word.categories))?;
        for (k, sense) in word.senses.iter().enumerate() {
            write_sense(out, k, sense)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
