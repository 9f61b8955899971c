//! Error type shared by every pipeline stage.

use std::path::PathBuf;

/// Error type for tag cloud failures.  Every variant aborts the run; no
/// partial cloud is ever produced.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CloudError {
    /// More words were requested than the input contains.
    #[error("requested {requested} words but the input has only {available} distinct words")]
    #[diagnostic(
        code(tagcloud::rank::vocabulary_too_small),
        help("pass a smaller value to -n/--count")
    )]
    VocabularyTooSmall {
        /// The requested word count.
        requested: i64,
        /// Number of distinct words in the frequency map.
        available: usize,
    },

    /// The requested word count is negative.
    #[error("invalid word count: {0}")]
    #[diagnostic(
        code(tagcloud::rank::invalid_count),
        help("the word count must be zero or greater")
    )]
    InvalidCount(i64),

    /// The display-size range has `min > max`.
    #[error("invalid size range: minimum {min} is larger than maximum {max}")]
    #[diagnostic(code(tagcloud::size::invalid_range))]
    InvalidSizeRange {
        /// Requested minimum display size.
        min: u32,
        /// Requested maximum display size.
        max: u32,
    },

    /// The input could not be opened or decoded.
    #[error("cannot read input {}", path.display())]
    #[diagnostic(code(tagcloud::source::unavailable))]
    InputUnavailable {
        /// Path as given by the user (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output destination could not be created or written.
    #[error("cannot write output {}", path.display())]
    #[diagnostic(code(tagcloud::output::unwritable))]
    OutputUnwritable {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
