//! In-memory transport for tests and in-process referees.
//!
//! [`MemoryLink::pair`] returns two connected link ends. Bytes cross the
//! pair exactly as queued: each `write_all` on one end becomes exactly one
//! `read_some` chunk on the other, so tests control chunk boundaries
//! precisely.

use std::collections::HashMap;
use std::io;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{Link, LinkError, Transport};

/// Transport over in-process channel pairs.
///
/// Ports are registered up front with [`register`](MemoryTransport::register),
/// which hands back the peer end of the link a later
/// [`open`](Transport::open) will return. Each port can be opened once;
/// links are exclusively owned.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    links: HashMap<String, MemoryLink>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `port` and returns the peer end of its link.
    ///
    /// Registering the same name again replaces the pending link.
    pub fn register(&mut self, port: &str) -> MemoryLink {
        let (local, peer) = MemoryLink::pair();
        self.links.insert(port.to_string(), local);
        peer
    }
}

impl Transport for MemoryTransport {
    type Link = MemoryLink;

    fn available_ports(&self) -> Result<Vec<String>, LinkError> {
        let mut names: Vec<String> = self.links.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn open(&mut self, port: &str) -> Result<MemoryLink, LinkError> {
        self.links
            .remove(port)
            .ok_or_else(|| LinkError::PortNotFound(port.to_string()))
    }
}

/// One end of an in-memory link.
#[derive(Debug)]
pub struct MemoryLink {
    tx: Option<UnboundedSender<Vec<u8>>>,
    rx: UnboundedReceiver<Vec<u8>>,
}

impl MemoryLink {
    /// Creates two connected ends. Writes on one arrive at the other,
    /// one chunk per write.
    pub fn pair() -> (MemoryLink, MemoryLink) {
        let (a_tx, a_rx) = mpsc::unbounded_channel();
        let (b_tx, b_rx) = mpsc::unbounded_channel();
        (
            MemoryLink {
                tx: Some(a_tx),
                rx: b_rx,
            },
            MemoryLink {
                tx: Some(b_tx),
                rx: a_rx,
            },
        )
    }
}

impl Link for MemoryLink {
    async fn read_some(&mut self) -> Result<Option<Vec<u8>>, LinkError> {
        // None once the peer closed and every queued chunk was drained.
        Ok(self.rx.recv().await)
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let tx = self.tx.as_ref().ok_or_else(closed)?;
        tx.send(bytes.to_vec()).map_err(|_| closed())?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), LinkError> {
        // The peer observes end-of-stream after draining queued chunks.
        self.tx = None;
        Ok(())
    }
}

fn closed() -> LinkError {
    LinkError::WriteFailed(io::Error::new(io::ErrorKind::BrokenPipe, "link closed"))
}
