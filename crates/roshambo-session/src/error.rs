//! Error types for the session layer.

use std::time::Duration;

use roshambo_transport::LinkError;

/// Errors raised across a session's open/exchange/close lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The operation needs the `Open` state. Raised before any transport
    /// I/O happens.
    #[error("session is not open")]
    NotOpen,

    /// `open` was called on a session that already opened once. Sessions
    /// never reopen, not even after close; make a new one instead.
    #[error("session was already opened")]
    AlreadyOpen,

    /// The link reported end-of-stream before a complete frame arrived.
    /// The connection is gone; close this session and open a new one.
    #[error("no data received from referee")]
    NoDataReceived,

    /// No complete frame arrived within the configured receive deadline.
    /// A late frame could still show up and desync the next exchange, so
    /// treat the connection as unusable.
    #[error("no response from referee within {0:?}")]
    ReceiveTimeout(Duration),

    /// The underlying link failed.
    #[error(transparent)]
    Link(#[from] LinkError),
}
