//! Serial transport implementation using `tokio-serial`.

use std::io;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::{Link, LinkError, Transport};

/// Default baud rate, matching the referee firmware.
pub const DEFAULT_BAUD: u32 = 9_600;

const READ_BUF_SIZE: usize = 1024;

/// Transport over real serial devices.
#[derive(Debug, Clone, Copy)]
pub struct SerialTransport {
    baud: u32,
}

impl SerialTransport {
    pub fn new(baud: u32) -> Self {
        Self { baud }
    }
}

impl Default for SerialTransport {
    fn default() -> Self {
        Self::new(DEFAULT_BAUD)
    }
}

impl Transport for SerialTransport {
    type Link = SerialLink;

    fn available_ports(&self) -> Result<Vec<String>, LinkError> {
        let ports = tokio_serial::available_ports().map_err(|e| LinkError::Enumerate(to_io(e)))?;
        Ok(ports.into_iter().map(|info| info.port_name).collect())
    }

    async fn open(&mut self, port: &str) -> Result<SerialLink, LinkError> {
        let stream = tokio_serial::new(port, self.baud)
            .open_native_async()
            .map_err(|e| LinkError::OpenFailed(to_io(e)))?;

        tracing::info!(port, baud = self.baud, "serial link opened");

        Ok(SerialLink { stream })
    }
}

/// An opened serial port.
pub struct SerialLink {
    stream: SerialStream,
}

impl Link for SerialLink {
    async fn read_some(&mut self) -> Result<Option<Vec<u8>>, LinkError> {
        let mut buf = [0u8; READ_BUF_SIZE];
        let n = self
            .stream
            .read(&mut buf)
            .await
            .map_err(LinkError::ReadFailed)?;
        if n == 0 {
            // Serial devices normally never EOF; this means the device went away.
            return Ok(None);
        }
        Ok(Some(buf[..n].to_vec()))
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.stream
            .write_all(bytes)
            .await
            .map_err(LinkError::WriteFailed)?;
        self.stream.flush().await.map_err(LinkError::WriteFailed)
    }

    async fn close(&mut self) -> Result<(), LinkError> {
        // Dropping the stream releases the device; flush pending output first.
        self.stream.flush().await.map_err(LinkError::WriteFailed)?;
        tracing::debug!("serial link closed");
        Ok(())
    }
}

fn to_io(err: tokio_serial::Error) -> io::Error {
    let kind = match err.kind() {
        tokio_serial::ErrorKind::NoDevice => io::ErrorKind::NotFound,
        tokio_serial::ErrorKind::InvalidInput => io::ErrorKind::InvalidInput,
        tokio_serial::ErrorKind::Io(kind) => kind,
        _ => io::ErrorKind::Other,
    };
    io::Error::new(kind, err.description)
}
