use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Payload must be valid JSON.")]
    InvalidJson,
}

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("cursor contains a malformed percent escape")]
    Percent,
    #[error("cursor text is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("cursor payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
