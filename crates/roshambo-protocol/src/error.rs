//! Error types for the protocol layer.

/// Errors raised while parsing wire frames or wire names.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A response frame did not split into exactly three fields.
    #[error("expected 3 response fields, found {0}")]
    FieldCount(usize),

    /// A move field held something other than a known move name.
    #[error("unknown move name {0:?}")]
    UnknownMove(String),

    /// A string was not a known game-mode name.
    #[error("unknown game mode {0:?}")]
    UnknownMode(String),

    /// A response frame contained bytes that are not valid UTF-8.
    #[error("response frame is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
