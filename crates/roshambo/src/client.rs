//! The referee client: one request/response exchange per round.

use roshambo_protocol::{self as protocol, GameMode, Move, RoundOutcome, RoundRequest};
use roshambo_session::{Session, SessionState};
use roshambo_transport::Transport;

use crate::RoundError;

/// A client for one referee connection.
///
/// Wraps a [`Session`] and maps domain values onto wire requests and wire
/// responses back onto domain outcomes. A round is a single attempt:
/// failures are never retried here, because the referee scores every
/// request it receives and a resend could count a round twice.
///
/// `play_round` takes `&mut self`, so one client runs one exchange at a
/// time. To share a client across tasks, put it behind an async mutex.
pub struct RefereeClient<T: Transport> {
    session: Session<T>,
}

impl<T: Transport> RefereeClient<T> {
    /// Wraps a session, opened or not.
    pub fn new(session: Session<T>) -> Self {
        Self { session }
    }

    /// Opens the underlying session.
    pub async fn open(&mut self) -> Result<(), RoundError> {
        self.session.open().await?;
        Ok(())
    }

    /// Plays one round: sends the mode and both moves, waits for the
    /// referee's verdict.
    ///
    /// In the AI modes the moves sent for AI sides are placeholders; the
    /// returned outcome echoes the moves the referee actually played.
    pub async fn play_round(
        &mut self,
        mode: GameMode,
        player1: Move,
        player2: Move,
    ) -> Result<RoundOutcome, RoundError> {
        let request = RoundRequest::new(mode, player1, player2);

        self.session
            .write_all(&protocol::encode_request(&request))
            .await?;
        let frame = self.session.read_until(protocol::RESPONSE_TERMINATOR).await?;
        let outcome = protocol::decode_response(&frame)?;

        tracing::debug!(mode = %mode, verdict = %outcome.verdict, "round decided");
        Ok(outcome)
    }

    /// Closes the underlying session. Idempotent.
    pub async fn close(&mut self) -> Result<(), RoundError> {
        self.session.close().await?;
        Ok(())
    }

    /// Lifecycle state of the underlying session.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }
}
