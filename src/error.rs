use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasslexError {
    /// A dataset line that is not a valid entry record. Loading aborts on
    /// the first bad line; silently skipping it would shrink the pool
    /// without anyone noticing.
    #[error("invalid record on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    /// Invalid run configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Filtering removed every entry; there is nothing to sample from.
    #[error("no admissible words remain after filtering; relax the exclusions or raise the character limit")]
    EmptyPool,

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
