//! Line-delimited JSON dataset loading.
//!
//! The whole file is read into memory up front; this is a one-shot batch
//! tool and the dataset fits comfortably. A line that fails to parse, or a
//! record missing `word` or `senses`, aborts the load with its line number.
//! Extra fields left behind by an un-normalized dataset are ignored.

use crate::entry::Entry;
use crate::error::PasslexError;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Load every entry from the dataset at `path`, reporting progress on the
/// way since bulk dumps run to hundreds of thousands of lines.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, PasslexError> {
    let text = fs::read_to_string(path)?;
    let line_count = text.lines().count() as u64;

    let bar = ProgressBar::new(line_count);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    bar.set_message("Loading words");

    let mut entries = Vec::with_capacity(line_count as usize);
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            bar.inc(1);
            continue;
        }
        let entry: Entry =
            serde_json::from_str(line).map_err(|source| PasslexError::Parse {
                line: i + 1,
                source,
            })?;
        entries.push(entry);
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn loads_entries_in_file_order() {
        let file = write_dataset(&[
            r#"{"word":"abate","senses":[{"id":"abate-1","glosses":["to lessen"]}]}"#,
            r#"{"word":"briar","categories":["English plant names"],"senses":[{"id":"briar-1","glosses":["a shrub"]}]}"#,
        ]);
        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "abate");
        assert!(entries[1].categories.contains("English plant names"));
    }

    #[test]
    fn bad_json_aborts_with_line_number() {
        let file = write_dataset(&[
            r#"{"word":"abate","senses":[{"id":"abate-1","glosses":["to lessen"]}]}"#,
            "{not json",
        ]);
        match load_entries(file.path()) {
            Err(PasslexError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_word_is_fatal() {
        let file = write_dataset(&[r#"{"senses":[{"id":"x","glosses":["y"]}]}"#]);
        assert!(matches!(
            load_entries(file.path()),
            Err(PasslexError::Parse { line: 1, .. })
        ));
    }
}
