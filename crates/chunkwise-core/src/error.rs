use thiserror::Error;

/// Canonical result for the pipeline crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transform failed: {0}")]
    Transform(String),

    #[error("key extraction failed: {0}")]
    Key(String),

    #[error("unsorted merge input: {0}")]
    Unsorted(String),

    // A pull on a sequence whose earlier pull already failed. Carries the
    // original failure's message so the cause stays visible.
    #[error("sequence poisoned by earlier failure: {0}")]
    Poisoned(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Transform(e.to_string())
    }
}
