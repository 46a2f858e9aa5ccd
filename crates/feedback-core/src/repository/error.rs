//! Store errors. None of them are fatal to the app.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend missing or refused the operation (e.g. quota exceeded)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Stored value could not be decoded
    #[error("malformed value under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
