//! Error types for the transport layer.

use std::io;

/// Errors raised by transports and the links they open.
///
/// Every variant carries the underlying [`io::Error`] where one exists, so
/// callers can log the OS-level cause without the transport leaking
/// implementation-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Port discovery itself failed.
    #[error("port enumeration failed: {0}")]
    Enumerate(#[source] io::Error),

    /// The named port does not exist on this transport.
    #[error("port {0:?} not found")]
    PortNotFound(String),

    /// The port exists but could not be opened.
    #[error("failed to open port: {0}")]
    OpenFailed(#[source] io::Error),

    /// A write did not complete.
    #[error("write failed: {0}")]
    WriteFailed(#[source] io::Error),

    /// A read failed outright (distinct from a clean end-of-stream).
    #[error("read failed: {0}")]
    ReadFailed(#[source] io::Error),
}
