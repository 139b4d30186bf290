use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeFailure {
    #[error("Missing 'body' field")]
    MissingBody,
    #[error("'body' must be a string, got {0}")]
    WrongType(&'static str),
    #[error("Invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Malformed event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
    #[error("Request body is not valid UTF-8")]
    NotUtf8,
}
