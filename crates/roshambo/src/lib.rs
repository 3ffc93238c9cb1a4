//! # Roshambo
//!
//! Rock-Paper-Scissors with arbitration performed by an external referee,
//! typically a microcontroller reached over a USB serial port. The client
//! sends one request line per round and the referee answers with a verdict
//! frame; this crate owns that exchange end to end.
//!
//! The workspace is layered:
//!
//! - `roshambo-transport`: ports and raw byte links.
//! - `roshambo-protocol`: domain types and the wire codec.
//! - `roshambo-session`: connection lifecycle and frame assembly.
//! - `roshambo` (this crate): the [`RefereeClient`] tying them together.
//!
//! ## Quick start
//!
//! ```no_run
//! use roshambo::prelude::*;
//! use roshambo_transport::SerialTransport;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::new(
//!     SerialTransport::default(),
//!     "/dev/ttyACM0",
//!     SessionConfig::default(),
//! );
//! let mut client = RefereeClient::new(session);
//!
//! client.open().await?;
//! let outcome = client
//!     .play_round(GameMode::ManVsMan, Move::Rock, Move::Scissors)
//!     .await?;
//! println!("{}: {} vs {}", outcome.verdict, outcome.player1, outcome.player2);
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::RefereeClient;
pub use error::RoundError;

/// Commonly used items, re-exported.
pub mod prelude {
    pub use crate::{RefereeClient, RoundError};
    pub use roshambo_protocol::{GameMode, Move, ProtocolError, RoundOutcome, Verdict};
    pub use roshambo_session::{Session, SessionConfig, SessionError, SessionState};
    pub use roshambo_transport::{Link, LinkError, Transport};
}
