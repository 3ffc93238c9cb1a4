//! One session per referee connection: open, exchange frames, close.

use std::future::Future;
use std::time::Duration;

use roshambo_transport::{Link, Transport};

use crate::SessionError;

/// Configuration for session behavior.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound on how long a receive may wait for a complete frame.
    /// `None` waits for as long as the link stays open.
    ///
    /// Expiry surfaces as [`SessionError::ReceiveTimeout`], so an unplugged
    /// or wedged referee fails a round instead of hanging it forever.
    pub receive_deadline: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            receive_deadline: Some(Duration::from_secs(5)),
        }
    }
}

/// Lifecycle state of a session.
///
/// ```text
/// Unopened --open--> Open --close--> Closed
/// ```
///
/// `Closed` is terminal. A session never reopens; make a new one for a new
/// connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unopened,
    Open,
    Closed,
}

enum Slot<L> {
    Unopened,
    Open(L),
    Closed,
}

/// A session over one referee link.
///
/// Owns the transport and, once opened, the link, for the whole connection
/// lifetime. Every operation other than `close` requires the `Open` state
/// and fails with [`SessionError::NotOpen`] before any transport I/O
/// otherwise.
///
/// Methods take `&mut self`, so a session serves one operation at a time;
/// interleaved exchanges on one link cannot happen by construction.
pub struct Session<T: Transport> {
    transport: T,
    port: String,
    config: SessionConfig,
    slot: Slot<T::Link>,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, port: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            transport,
            port: port.into(),
            config,
            slot: Slot::Unopened,
        }
    }

    /// The port this session opens.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        match self.slot {
            Slot::Unopened => SessionState::Unopened,
            Slot::Open(_) => SessionState::Open,
            Slot::Closed => SessionState::Closed,
        }
    }

    /// Opens the link.
    ///
    /// A failed open leaves the session `Unopened`, so it may be retried.
    /// A successful open can never be repeated, even after `close`.
    pub async fn open(&mut self) -> Result<(), SessionError> {
        match self.slot {
            Slot::Unopened => {}
            Slot::Open(_) | Slot::Closed => return Err(SessionError::AlreadyOpen),
        }

        let link = self.transport.open(&self.port).await?;
        self.slot = Slot::Open(link);
        tracing::debug!(port = %self.port, "session opened");
        Ok(())
    }

    /// Writes the whole byte sequence and flushes it.
    pub async fn write_all(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        let link = self.link_mut()?;
        link.write_all(bytes).await?;
        tracing::trace!(len = bytes.len(), "frame written");
        Ok(())
    }

    /// One bounded read: the next chunk the link delivers, as-is.
    pub async fn read_once(&mut self) -> Result<Vec<u8>, SessionError> {
        let deadline = self.config.receive_deadline;
        let link = self.link_mut()?;

        with_deadline(deadline, async {
            match link.read_some().await? {
                Some(chunk) => Ok(chunk),
                None => Err(SessionError::NoDataReceived),
            }
        })
        .await
    }

    /// Accumulates reads until the buffer ends with `terminator`, then
    /// returns the frame minus the terminator, trimmed of surrounding
    /// ASCII whitespace.
    ///
    /// Chunk boundaries are irrelevant: the same bytes split any way
    /// across reads produce the same frame. End-of-stream before the
    /// terminator fails with [`SessionError::NoDataReceived`]; a partial
    /// frame is never returned.
    pub async fn read_until(&mut self, terminator: u8) -> Result<Vec<u8>, SessionError> {
        let deadline = self.config.receive_deadline;
        let link = self.link_mut()?;
        with_deadline(deadline, accumulate(link, terminator)).await
    }

    /// Closes the session.
    ///
    /// Total: reaches `Closed` from any state and is idempotent. Errors
    /// flushing the link still leave the session `Closed` with the link
    /// released.
    pub async fn close(&mut self) -> Result<(), SessionError> {
        match std::mem::replace(&mut self.slot, Slot::Closed) {
            Slot::Open(mut link) => {
                let result = link.close().await;
                tracing::debug!(port = %self.port, "session closed");
                result.map_err(SessionError::from)
            }
            Slot::Unopened | Slot::Closed => Ok(()),
        }
    }

    fn link_mut(&mut self) -> Result<&mut T::Link, SessionError> {
        match &mut self.slot {
            Slot::Open(link) => Ok(link),
            Slot::Unopened | Slot::Closed => Err(SessionError::NotOpen),
        }
    }
}

async fn accumulate<L: Link>(link: &mut L, terminator: u8) -> Result<Vec<u8>, SessionError> {
    let mut frame = Vec::new();
    loop {
        match link.read_some().await? {
            Some(chunk) => {
                frame.extend_from_slice(&chunk);
                if frame.last() == Some(&terminator) {
                    frame.pop();
                    let trimmed = frame.trim_ascii();
                    tracing::trace!(len = trimmed.len(), "frame received");
                    return Ok(trimmed.to_vec());
                }
            }
            None => return Err(SessionError::NoDataReceived),
        }
    }
}

async fn with_deadline<F, O>(deadline: Option<Duration>, op: F) -> Result<O, SessionError>
where
    F: Future<Output = Result<O, SessionError>>,
{
    match deadline {
        Some(limit) => match tokio::time::timeout(limit, op).await {
            Ok(result) => result,
            Err(_) => Err(SessionError::ReceiveTimeout(limit)),
        },
        None => op.await,
    }
}
