use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("random user request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("random user API answered with status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("random user response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("random user response contained no results")]
    NoResults,
    #[error("failed to store user {user_id}: {source}")]
    Storage {
        user_id: String,
        #[source]
        source: BoxError,
    },
    #[error("stored item has a missing or non-string `{0}` attribute")]
    MalformedItem(&'static str),
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn storage(user_id: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Storage {
            user_id: user_id.into(),
            source: source.into(),
        }
    }
}

