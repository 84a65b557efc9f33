use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("hls playlist error: {0}")]
    HlsPlaylistError(String),
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl ExtractorError {
    /// Whether this failure happened on the wire rather than while
    /// interpreting a payload. Both kinds trigger the same strategy fallback,
    /// but callers can still tell them apart.
    pub fn is_transport(&self) -> bool {
        matches!(self, ExtractorError::HttpError(_))
    }
}
