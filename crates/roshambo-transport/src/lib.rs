//! Byte-link transport layer for Roshambo.
//!
//! The referee speaks a delimiter-framed text protocol over a raw byte
//! stream, usually a USB serial port. This crate abstracts that stream
//! behind two traits so the layers above never touch device APIs:
//!
//! - [`Transport`]: discovers ports and opens them.
//! - [`Link`]: one opened, exclusively owned byte stream.
//!
//! A [`Link`] is owned by exactly one caller; all methods take `&mut self`
//! and the traits require only `Send`. Sharing, if ever needed, belongs to
//! the layer that owns the link.
//!
//! # Feature Flags
//!
//! - `serial` (default): real serial devices via `tokio-serial`
//!
//! [`MemoryTransport`] is always available for tests and in-process
//! referees.

#![allow(async_fn_in_trait)]

mod error;
mod mem;
#[cfg(feature = "serial")]
mod serial;

pub use error::LinkError;
pub use mem::{MemoryLink, MemoryTransport};
#[cfg(feature = "serial")]
pub use serial::{DEFAULT_BAUD, SerialLink, SerialTransport};

/// A way of discovering and opening byte links.
pub trait Transport: Send + 'static {
    /// The link type this transport hands out.
    type Link: Link;

    /// Names of the ports currently available for [`open`](Self::open).
    fn available_ports(&self) -> Result<Vec<String>, LinkError>;

    /// Opens the named port, transferring exclusive ownership of the
    /// resulting link to the caller.
    async fn open(&mut self, port: &str) -> Result<Self::Link, LinkError>;
}

/// One opened byte stream.
///
/// Reads are chunk-oriented: [`read_some`](Link::read_some) yields whatever
/// bytes the device had ready, with no framing of its own. Framing is the
/// session layer's job, and it must not depend on how bytes fall into
/// chunks.
pub trait Link: Send + 'static {
    /// Waits for the next chunk of bytes.
    ///
    /// `Ok(Some(chunk))` is one delivery (possibly empty on some devices),
    /// `Ok(None)` is a clean end-of-stream, and `Err` is a failed read.
    async fn read_some(&mut self) -> Result<Option<Vec<u8>>, LinkError>;

    /// Writes the whole byte sequence and flushes it to the device.
    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError>;

    /// Releases the link. Dropping a link releases it too; `close` exists
    /// to surface flush errors instead of discarding them.
    async fn close(&mut self) -> Result<(), LinkError>;
}
