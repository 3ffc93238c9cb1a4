//! Unified error type for the client.

use roshambo_protocol::ProtocolError;
use roshambo_session::SessionError;
use roshambo_transport::LinkError;

/// Why a round (or a lifecycle operation around it) failed.
///
/// One wrapper over the layer errors, so embedders handle a single type.
/// Display is transparent: the message is the underlying cause's.
#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    /// The link failed at the transport level.
    #[error(transparent)]
    Link(#[from] LinkError),

    /// The session refused or the exchange broke down.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A complete frame arrived but did not parse.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl RoundError {
    /// Whether the connection likely survived the failure.
    ///
    /// A parse failure means framing still worked, so the link is aligned
    /// and the next round can proceed. Anything below that leaves the
    /// stream in an unknown state; close the session and open a new one.
    pub fn connection_reusable(&self) -> bool {
        matches!(self, RoundError::Protocol(_))
    }
}
