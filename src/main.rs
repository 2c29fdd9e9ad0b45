use clap::Parser;
use passlex::io_utils::{passlex_cli_error, simple_cli_error};
use passlex::{
    load_entries, merge_homographs, render_option, sample_passphrase, EntryFilter, ExclusionSets,
};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

/// Generate multi-word passphrases from a bulk dictionary dataset, with a
/// vetting report for every chosen word.
#[derive(Parser)]
struct Args {
    /// Path of the dictionary data file to use (one JSON record per line)
    data_path: PathBuf,
    /// Number of words to have in each passphrase
    #[arg(short = 'w', long, default_value_t = 4)]
    word_count: usize,
    /// Maximum number of characters a word may have
    #[arg(short = 'c', long, default_value_t = 8)]
    char_max: usize,
    /// Number of passphrase options to generate
    #[arg(short = 'o', long, default_value_t = 1)]
    option_count: usize,
    /// Exclude words in the specified categories
    #[arg(short = 'a', long, value_name = "CATEGORY", num_args = 1..)]
    exclude_cats: Vec<String>,
    /// Exclude words with the specified tags
    #[arg(short = 't', long, value_name = "TAG", num_args = 1..)]
    exclude_tags: Vec<String>,
    /// Include abbreviations (excluded by default)
    #[arg(short = 'b', long)]
    abbreviations: bool,
    /// Include alternative forms (excluded by default)
    #[arg(short = 'l', long)]
    alternative_forms: bool,
    /// Include given names (excluded by default)
    #[arg(short = 'g', long)]
    given_names: bool,
    /// Include morphemes such as affixes and suffixes (excluded by default)
    #[arg(short = 'm', long)]
    morphemes: bool,
    /// Include names of people, places, etc. (excluded by default)
    #[arg(short = 'n', long)]
    names: bool,
    /// Include nonstandard forms (excluded by default)
    #[arg(short = 's', long)]
    nonstandard: bool,
    /// Include archaic and obsolete words (excluded by default)
    #[arg(short = 'd', long)]
    old: bool,
    /// Include phrases which consist of multiple words (excluded by default)
    #[arg(short = 'p', long)]
    phrases: bool,
    /// Include offensive words, vulgar words, and slurs (excluded by default)
    #[arg(short = 'f', long)]
    profanity: bool,
    /// Include surnames (excluded by default)
    #[arg(short = 'r', long)]
    surnames: bool,
}

impl Args {
    fn enabled_toggles(&self) -> BTreeSet<String> {
        let pairs = [
            ("abbreviations", self.abbreviations),
            ("alternative-forms", self.alternative_forms),
            ("given-names", self.given_names),
            ("morphemes", self.morphemes),
            ("names", self.names),
            ("nonstandard", self.nonstandard),
            ("old", self.old),
            ("phrases", self.phrases),
            ("profanity", self.profanity),
            ("surnames", self.surnames),
        ];
        pairs
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.word_count == 0 {
        return Err(simple_cli_error("--word-count must be at least 1").into());
    }
    if args.char_max == 0 {
        return Err(simple_cli_error("--char-max must be at least 1").into());
    }
    if args.option_count == 0 {
        return Err(simple_cli_error("--option-count must be at least 1").into());
    }

    println!("Loading words...");
    let entries =
        load_entries(&args.data_path).map_err(|e| passlex_cli_error("loading dataset", e))?;
    println!("Loaded {} words.", entries.len());

    println!("Filtering words...");
    let exclusions =
        ExclusionSets::build(&args.enabled_toggles(), &args.exclude_cats, &args.exclude_tags);
    let filter = EntryFilter::new(args.char_max, args.phrases, args.abbreviations, exclusions);
    let pool = filter.admissible_pool(entries);

    println!(
        "Selecting {} words randomly from a pool of {} words.",
        args.word_count,
        pool.len()
    );

    let mut rng = rand::thread_rng();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..args.option_count {
        let chosen = sample_passphrase(&mut rng, &pool, args.word_count)
            .map_err(|e| passlex_cli_error("selecting words", e))?;
        let merged: Vec<_> = chosen
            .iter()
            .map(|entry| merge_homographs(entry, &pool))
            .collect();
        render_option(&mut out, i, &merged)?;
    }
    out.flush()?;
    Ok(())
}
