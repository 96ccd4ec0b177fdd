use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read corpus {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("matching `{pattern}` failed")]
    Match {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("no computed count for claim `{0}`")]
    MissingCount(String),
}

pub type Result<T> = std::result::Result<T, Error>;
