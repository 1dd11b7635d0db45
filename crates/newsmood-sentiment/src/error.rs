use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon line {line}: {reason}")]
    Lexicon { line: usize, reason: String },
}
