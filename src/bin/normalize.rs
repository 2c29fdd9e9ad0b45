use clap::Parser;
use passlex::io_utils::{io_cli_error, passlex_cli_error};
use passlex::load_entries;
use std::fs;
use std::path::PathBuf;

/// Normalize a dictionary dataset in place: drop every entry field except
/// `word`, `categories` and `senses`, and sort entries by word. The bulk
/// dumps carry pronunciation and etymology baggage the generator never
/// reads, and dropping it shrinks the file considerably.
#[derive(Parser)]
struct Args {
    /// The data file to remove baggage from
    data_path: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut entries =
        load_entries(&args.data_path).map_err(|e| passlex_cli_error("loading dataset", e))?;

    println!("Removing baggage and sorting...");
    entries.sort_by(|a, b| a.word.cmp(&b.word));

    println!("Overwriting data file...");
    let mut out = String::new();
    for entry in &entries {
        // Entry only models the fields worth keeping, so serializing it
        // back out drops the baggage.
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    fs::write(&args.data_path, out)
        .map_err(|e| io_cli_error("writing data file", &args.data_path, e))?;
    Ok(())
}
